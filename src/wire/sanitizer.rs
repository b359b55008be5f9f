//! Pre-decode security gate.
//!
//! Runs once over the raw input, ahead of format sniffing, so every decode
//! path sees the same screened input. Three checks: overall length, a
//! character allow-list (alphanumerics plus URI-structural punctuation),
//! and a case-insensitive denylist of script/URI injection markers.

use log::debug;

use crate::exceptions::{Result, SharingError};
use crate::wire::constants::{ALLOWED_PUNCTUATION, MAX_CODE_LENGTH, SUSPICIOUS_PATTERNS};

/// Screen raw decode input; `Err(MaliciousCode)` on any violation
pub fn screen(raw: &str) -> Result<()> {
    if raw.chars().count() > MAX_CODE_LENGTH {
        debug!("input rejected: length {} over limit", raw.chars().count());
        return Err(SharingError::MaliciousCode);
    }

    if !raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || ALLOWED_PUNCTUATION.contains(c))
    {
        debug!("input rejected: character outside allow-list");
        return Err(SharingError::MaliciousCode);
    }

    let lowered = raw.to_lowercase();
    for pattern in SUSPICIOUS_PATTERNS {
        if lowered.contains(pattern) {
            debug!("input rejected: suspicious pattern {pattern:?}");
            return Err(SharingError::MaliciousCode);
        }
    }

    Ok(())
}

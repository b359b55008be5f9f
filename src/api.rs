//! High-level API for preset interchange.
//!
//! `encode_preset` and `decode_preset` are the only entry points external
//! callers need. Both are pure and synchronous; the wall clock is read
//! exactly once per call and threaded through, so expiry stamping and
//! checking cannot straddle a clock edge within one operation.

use chrono::Utc;
use log::debug;

use crate::exceptions::Result;
use crate::wire::compact;
use crate::wire::preset::CanonicalPreset;
use crate::wire::sanitizer;
use crate::wire::sniffer::{self, SniffedFormat};
use crate::wire::validator;
use crate::wire::verbose;

/// Output wire format chosen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareFormat {
    /// `emozleep://preset?data=<base64>` link; lossless, expiring
    Link,
    /// 18-character numeric code; lossy volumes, no expiry
    Compact,
}

/// Encode a preset into the chosen wire format
pub fn encode_preset(preset: &CanonicalPreset, format: ShareFormat) -> Result<String> {
    match format {
        ShareFormat::Link => verbose::encode_link(preset, Utc::now()),
        ShareFormat::Compact => compact::encode_current(preset),
    }
}

/// Decode untrusted share input back into a validated preset.
///
/// Input is trimmed, screened by the security gate, classified, decoded by
/// the matching format, then validated. Validation is never skipped, no
/// matter which format the input sniffed as.
pub fn decode_preset(raw: &str) -> Result<CanonicalPreset> {
    let trimmed = raw.trim();
    sanitizer::screen(trimmed)?;

    let now = Utc::now();
    let sniffed = sniffer::classify(trimmed);
    debug!("share input classified as {sniffed:?}");

    match sniffed {
        SniffedFormat::Link => {
            let payload = verbose::decode_link(trimmed)?;
            validator::validate_payload(&payload, now)
        }
        SniffedFormat::Compact(generation) => {
            let decoded = compact::decode(trimmed, generation)?;
            validator::validate_compact(&decoded)
        }
        SniffedFormat::Base64 => {
            let payload = verbose::decode_base64(trimmed)?;
            validator::validate_payload(&payload, now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exceptions::SharingError;
    use crate::wire::constants::CHANNEL_COUNT;

    fn preset() -> CanonicalPreset {
        let mut versions = [0u8; CHANNEL_COUNT];
        versions[11] = 1;
        CanonicalPreset {
            name: "Evening Wind".to_string(),
            volumes: [
                30.0, 25.0, 0.0, 20.0, 0.0, 15.0, 0.0, 35.0, 0.0, 0.0, 0.0, 0.0, 25.0,
            ],
            versions,
            emotion: None,
            description: None,
        }
    }

    #[test]
    fn test_link_round_trip_through_public_api() {
        let link = encode_preset(&preset(), ShareFormat::Link).unwrap();
        let decoded = decode_preset(&link).unwrap();
        assert_eq!(decoded, preset());
    }

    #[test]
    fn test_compact_round_trip_through_public_api() {
        let code = encode_preset(&preset(), ShareFormat::Compact).unwrap();
        assert_eq!(code.len(), 18);
        let decoded = decode_preset(&code).unwrap();
        assert_eq!(decoded.versions[11], 1);
        for (a, b) in preset().volumes.iter().zip(decoded.volumes.iter()) {
            assert!((a - b).abs() < 2.0 * 100.0 / 35.0);
        }
    }

    #[test]
    fn test_bare_base64_payload_decodes() {
        let link = encode_preset(&preset(), ShareFormat::Link).unwrap();
        let data = link.split("data=").nth(1).unwrap();
        let decoded = decode_preset(data).unwrap();
        assert_eq!(decoded.name, "Evening Wind");
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let code = encode_preset(&preset(), ShareFormat::Compact).unwrap();
        let decoded = decode_preset(&format!("  {code}\n")).unwrap();
        assert_eq!(decoded.versions[11], 1);
    }

    #[test]
    fn test_garbage_input_reports_invalid_format() {
        assert_eq!(
            decode_preset("definitely-not-a-preset"),
            Err(SharingError::InvalidFormat)
        );
    }

    #[test]
    fn test_sanitizer_runs_before_any_decode() {
        assert_eq!(
            decode_preset("emozleep://preset?data=<script>"),
            Err(SharingError::MaliciousCode)
        );
    }
}

//! Wire format classification.
//!
//! Pure inspection of a raw share string. Nothing is rejected here:
//! anything that is neither a link nor a well-shaped compact code falls
//! through to the Base64 path, where it will fail with an accurate error
//! if it is garbage.

use crate::wire::compact::Generation;
use crate::wire::constants::{
    CODE_PREFIX, COMPACT_LEN_CURRENT, COMPACT_LEN_LEGACY, URL_SCHEME,
};

/// Result of classifying a raw share string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SniffedFormat {
    /// `emozleep://preset?data=...` link
    Link,
    /// Fixed-width numeric code of the given generation
    Compact(Generation),
    /// Anything else, attempted as a bare Base64 verbose payload
    Base64,
}

/// Classify a trimmed share string into a wire format
pub fn classify(raw: &str) -> SniffedFormat {
    if raw.starts_with(&format!("{URL_SCHEME}://")) {
        return SniffedFormat::Link;
    }

    if raw.starts_with(CODE_PREFIX) && raw.chars().all(|c| c.is_ascii_alphanumeric()) {
        match raw.len() {
            COMPACT_LEN_LEGACY => return SniffedFormat::Compact(Generation::Legacy),
            COMPACT_LEN_CURRENT => return SniffedFormat::Compact(Generation::Current),
            _ => {}
        }
    }

    SniffedFormat::Base64
}

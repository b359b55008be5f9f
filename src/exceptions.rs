//! Error types for presetwire

use std::fmt;

/// Main error type for codec operations.
///
/// Closed taxonomy: every variant carries a static description and nothing
/// else, so no internal state crosses the codec boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharingError {
    /// Share code does not match any known wire format
    InvalidFormat,

    /// Payload bytes could not be deserialized
    CorruptedData,

    /// Payload was produced by an unsupported codec version
    UnsupportedVersion,

    /// Share code is past its 24-hour expiration
    Expired,

    /// Volume or version array has the wrong arity
    InvalidDataSize,

    /// A volume is outside the 0-100 range
    InvalidVolumeRange,

    /// A version selector is outside the channel's supported range
    InvalidVersionRange,

    /// Recomputed checksum does not match the embedded one
    ChecksumMismatch,

    /// Encoded output exceeds the maximum share-code length
    CodeTooLong,

    /// Input rejected by the security gate
    MaliciousCode,

    /// Unexpected internal failure during encoding
    EncodingFailed,
}

impl fmt::Display for SharingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SharingError::InvalidFormat => "share code has an unrecognized format",
            SharingError::CorruptedData => "share code data is corrupted",
            SharingError::UnsupportedVersion => "share code version is not supported",
            SharingError::Expired => "share code has expired (24 hour limit)",
            SharingError::InvalidDataSize => "share code data size is invalid",
            SharingError::InvalidVolumeRange => "volume value is out of range",
            SharingError::InvalidVersionRange => "version value is out of range",
            SharingError::ChecksumMismatch => "share code integrity check failed",
            SharingError::CodeTooLong => "share code is too long",
            SharingError::MaliciousCode => "suspicious share code detected",
            SharingError::EncodingFailed => "preset encoding failed",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for SharingError {}

impl From<serde_json::Error> for SharingError {
    fn from(_: serde_json::Error) -> Self {
        SharingError::CorruptedData
    }
}

impl From<base64::DecodeError> for SharingError {
    fn from(_: base64::DecodeError) -> Self {
        SharingError::InvalidFormat
    }
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, SharingError>;

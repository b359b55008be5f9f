//! Core wire-format constants that never change.

/// URI scheme carrying the verbose payload
pub const URL_SCHEME: &str = "emozleep";

/// Two-character protocol prefix of every compact code
pub const CODE_PREFIX: &str = "EZ";

/// Supported verbose payload version
pub const SHARE_VERSION: &str = "v1.0";

/// Number of sound channels in the current preset layout
pub const CHANNEL_COUNT: usize = 13;

/// Number of channels in the legacy preset layout
pub const LEGACY_CHANNEL_COUNT: usize = 11;

/// Length of a current-generation compact code:
/// prefix (2) + volumes (13) + mask (1) + checksum (2)
pub const COMPACT_LEN_CURRENT: usize = 18;

/// Length of a legacy compact code:
/// prefix (2) + volumes (11) + mask (1) + checksum (2)
pub const COMPACT_LEN_LEGACY: usize = 16;

/// Maximum length of any share code, in either direction
pub const MAX_CODE_LENGTH: usize = 2048;

/// Hours until a verbose payload expires
pub const EXPIRATION_HOURS: i64 = 24;

/// Hex digits kept from the verbose payload checksum
pub const PAYLOAD_CHECKSUM_LEN: usize = 8;

/// Hex digits kept from the compact code checksum
pub const COMPACT_CHECKSUM_LEN: usize = 2;

/// Channels whose alternate version is encodable in the current
/// compact mask, in bit order (bit 0 first)
pub const MASK_CHANNELS: [usize; 3] = [1, 5, 11];

/// Channels addressed by the legacy 2-bit mask, in bit order.
/// The old 11-channel layout only exposed rain and keyboard variants.
pub const LEGACY_MASK_CHANNELS: [usize; 2] = [4, 9];

/// Number of audio variants per channel; version selectors range over
/// `0..VERSION_COUNTS[i]`
pub const VERSION_COUNTS: [u8; CHANNEL_COUNT] = [1, 2, 2, 2, 1, 2, 2, 1, 1, 1, 1, 2, 2];

/// Non-alphanumeric characters permitted in raw decode input
pub const ALLOWED_PUNCTUATION: &str = ":/?.=&-_";

/// Case-insensitive substrings that reject input outright
pub const SUSPICIOUS_PATTERNS: [&str; 6] = [
    "javascript:",
    "data:",
    "file:",
    "<script",
    "eval(",
    "document.",
];

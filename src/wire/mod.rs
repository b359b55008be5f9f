//! Wire formats for preset interchange.
//!
//! Two formats are produced today: the verbose link format
//! (`emozleep://preset?data=<base64 JSON>`) and the 18-character compact
//! numeric code. A third shape, the 16-character legacy code, is accepted
//! on decode only.

pub mod checksums;
pub mod compact;
pub mod constants;
pub mod preset;
pub mod sanitizer;
pub mod sniffer;
pub mod validator;
pub mod verbose;

pub use compact::Generation;
pub use preset::CanonicalPreset;
pub use sniffer::SniffedFormat;

//! Presetwire - Preset Interchange Codec
//!
//! Encodes in-memory sound presets into compact textual wire formats that
//! survive arbitrary text channels (SMS, chat, deep links), and decodes
//! untrusted input back into validated presets with format auto-detection,
//! multi-generation backward compatibility and integrity verification.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,

    // All warnings must be fixed
    warnings,
)]
#![warn(
    // Documentation
    missing_docs,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Code clarity and maintainability
    clippy::inefficient_to_string,
    clippy::cognitive_complexity,
    clippy::type_complexity,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::explicit_iter_loop,
)]
#![allow(
    // Wire constants and test helpers are self-describing
    missing_docs,
)]

pub mod api;
pub mod exceptions;
pub mod exit_codes;
pub mod logger;
pub mod version;
pub mod wire;

// Re-export main API surface
pub use api::{ShareFormat, decode_preset, encode_preset};
pub use exceptions::SharingError;
pub use wire::preset::CanonicalPreset;

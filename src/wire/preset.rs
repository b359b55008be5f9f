//! Canonical in-memory preset model and the channel catalog.

use crate::wire::constants::{CHANNEL_COUNT, VERSION_COUNTS};

/// The source-of-truth preset shape the codec serializes.
///
/// Arity is fixed by the type: 13 channels, always. Presets coming out of
/// stores that predate the 13-channel layout must be normalized through
/// [`CanonicalPreset::from_store`] before encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalPreset {
    /// Display name of the preset
    pub name: String,
    /// Per-channel volume, each in `[0, 100]`
    pub volumes: [f32; CHANNEL_COUNT],
    /// Per-channel audio variant selector, each in `0..version_count(i)`
    pub versions: [u8; CHANNEL_COUNT],
    /// Emotion tag attached by the recommendation layer, if any
    pub emotion: Option<String>,
    /// Free-form description
    pub description: Option<String>,
}

impl CanonicalPreset {
    /// Build a canonical preset from store-shaped arrays, zero-padding
    /// legacy 11/12-length volume and version arrays to 13 channels.
    ///
    /// Arrays longer than 13 are truncated; the store has never produced
    /// them but pasted data might claim to.
    pub fn from_store(
        name: impl Into<String>,
        volumes: &[f32],
        versions: &[u8],
        emotion: Option<String>,
        description: Option<String>,
    ) -> Self {
        let mut vol = [0.0f32; CHANNEL_COUNT];
        for (slot, v) in vol.iter_mut().zip(volumes.iter()) {
            *slot = *v;
        }
        let mut ver = [0u8; CHANNEL_COUNT];
        for (slot, v) in ver.iter_mut().zip(versions.iter()) {
            *slot = *v;
        }
        CanonicalPreset {
            name: name.into(),
            volumes: vol,
            versions: ver,
            emotion,
            description,
        }
    }
}

/// Number of audio variants available on the given channel
pub fn version_count(channel: usize) -> u8 {
    VERSION_COUNTS.get(channel).copied().unwrap_or(1)
}

/// Highest valid version selector for the given channel
pub fn max_version(channel: usize) -> u8 {
    version_count(channel).saturating_sub(1)
}

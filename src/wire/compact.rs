//! Compact numeric wire format.
//!
//! A compact code is `EZ` + one base-36 digit per channel volume + one
//! base-36 version-mask digit + 2 checksum characters. Two generations
//! exist on the wire:
//!
//! - current: 13 channels, 18 chars, mask over channels 1/5/11,
//!   truncated-hash checksum;
//! - legacy: 11 channels, 16 chars, mask over channels 4/9, decimal-sum
//!   checksum (with a truncated-hash revision also in circulation).
//!
//! Only the current generation is encoded; legacy exists as a decode
//! target for codes minted by older app releases.
//!
//! Volumes are quantized to 36 steps: `digit = trunc(volume) * 35 / 100`,
//! decoded back as `digit * 100 / 35`, so resolution is lossy to steps of
//! roughly 2.86.

use log::debug;

use crate::exceptions::{Result, SharingError};
use crate::wire::checksums::{
    CURRENT_SCHEMES, CompactScheme, LEGACY_SCHEMES, compact_hash_checksum,
};
use crate::wire::constants::{
    CHANNEL_COUNT, CODE_PREFIX, COMPACT_LEN_CURRENT, COMPACT_LEN_LEGACY, LEGACY_CHANNEL_COUNT,
    LEGACY_MASK_CHANNELS, MASK_CHANNELS,
};
use crate::wire::preset::CanonicalPreset;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Wire generation of a compact code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    /// 16-char, 11-channel codes from older app releases (decode only)
    Legacy,
    /// 18-char, 13-channel codes
    Current,
}

impl Generation {
    /// Channels carried by this generation
    pub fn channel_count(self) -> usize {
        match self {
            Generation::Legacy => LEGACY_CHANNEL_COUNT,
            Generation::Current => CHANNEL_COUNT,
        }
    }

    /// Total code length for this generation
    pub fn code_len(self) -> usize {
        match self {
            Generation::Legacy => COMPACT_LEN_LEGACY,
            Generation::Current => COMPACT_LEN_CURRENT,
        }
    }

    /// Channels addressed by the version mask, in bit order
    pub fn mask_channels(self) -> &'static [usize] {
        match self {
            Generation::Legacy => &LEGACY_MASK_CHANNELS,
            Generation::Current => &MASK_CHANNELS,
        }
    }

    /// Checksum schemes legitimate for this generation, in trial order
    pub fn checksum_schemes(self) -> &'static [CompactScheme] {
        match self {
            Generation::Legacy => &LEGACY_SCHEMES,
            Generation::Current => &CURRENT_SCHEMES,
        }
    }
}

/// Fields recovered from a compact code, pre-validation.
///
/// Arrays keep the generation's arity; padding to 13 channels happens in
/// the validator once the checksum has been confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedCompact {
    /// Dequantized integer volumes, one per wire channel
    pub volumes: Vec<u32>,
    /// Version selectors recovered from the mask digit
    pub versions: Vec<u8>,
    /// Trailing 2-character checksum as it appeared on the wire
    pub checksum: String,
    /// Generation the code was decoded under
    pub generation: Generation,
}

/// Quantize a volume to a base-36 step
pub fn quantize(volume: f32) -> u32 {
    (volume.clamp(0.0, 100.0) as u32) * 35 / 100
}

/// Integer volume a base-36 step decodes to
pub fn dequantize(digit: u32) -> u32 {
    (digit * 100 / 35).min(100)
}

/// Encode a preset as a current-generation 18-character code.
///
/// Version selectors on channels outside the mask set are not
/// representable and encode as default; the caller picks the verbose
/// format when that matters.
pub fn encode_current(preset: &CanonicalPreset) -> Result<String> {
    let mut code = String::with_capacity(COMPACT_LEN_CURRENT);
    code.push_str(CODE_PREFIX);

    let mut volumes_int = Vec::with_capacity(CHANNEL_COUNT);
    for volume in preset.volumes {
        let digit = quantize(volume);
        code.push(BASE36_DIGITS[digit as usize] as char);
        volumes_int.push(dequantize(digit));
    }

    let mut mask = 0u32;
    for (bit, &channel) in MASK_CHANNELS.iter().enumerate() {
        if preset.versions[channel] > 0 {
            mask |= 1 << bit;
        }
    }
    code.push(BASE36_DIGITS[mask as usize] as char);

    // Mask channels are the only ones the wire can carry; the checksum
    // covers what a decoder will actually reconstruct.
    let mut wire_versions = [0u8; CHANNEL_COUNT];
    for &channel in &MASK_CHANNELS {
        if preset.versions[channel] > 0 {
            wire_versions[channel] = 1;
        }
    }
    code.push_str(&compact_hash_checksum(&volumes_int, &wire_versions));

    debug!("✅ compact code generated: {} chars", code.len());
    Ok(code)
}

/// Decode a compact code of the given generation into its raw fields.
///
/// Checksum and range verification happen in the validator, not here.
pub fn decode(code: &str, generation: Generation) -> Result<DecodedCompact> {
    if code.len() != generation.code_len() || !code.is_ascii() {
        return Err(SharingError::InvalidFormat);
    }
    if !code.starts_with(CODE_PREFIX) {
        return Err(SharingError::InvalidFormat);
    }

    let channels = generation.channel_count();
    let body = &code[CODE_PREFIX.len()..];

    let mut volumes = Vec::with_capacity(channels);
    for c in body.chars().take(channels) {
        let digit = c
            .to_ascii_lowercase()
            .to_digit(36)
            .ok_or(SharingError::CorruptedData)?;
        volumes.push(dequantize(digit));
    }

    let mask_char = body
        .chars()
        .nth(channels)
        .ok_or(SharingError::CorruptedData)?;
    let mask = mask_char
        .to_ascii_lowercase()
        .to_digit(36)
        .ok_or(SharingError::CorruptedData)?;

    let mut versions = vec![0u8; channels];
    for (bit, &channel) in generation.mask_channels().iter().enumerate() {
        if mask & (1 << bit) != 0 {
            versions[channel] = 1;
        }
    }

    let checksum = code[code.len() - 2..].to_string();

    Ok(DecodedCompact {
        volumes,
        versions,
        checksum,
        generation,
    })
}

//! Post-decode validation.
//!
//! Every decode path ends here, regardless of which wire format the input
//! arrived in. Checks run in a fixed order and short-circuit on the first
//! failure; only a fully validated payload is turned into a
//! [`CanonicalPreset`].

use chrono::{DateTime, Utc};
use log::debug;

use crate::exceptions::{Result, SharingError};
use crate::wire::checksums::{payload_checksum, verify_compact};
use crate::wire::compact::DecodedCompact;
use crate::wire::constants::{CHANNEL_COUNT, SHARE_VERSION};
use crate::wire::preset::{CanonicalPreset, max_version};
use crate::wire::verbose::ShareablePreset;

/// Name given to presets recovered from a compact code, which carries no
/// metadata of its own
const COMPACT_PRESET_NAME: &str = "Shared Preset";

/// Validate a verbose payload and convert it into a canonical preset.
///
/// Order: expiry, format version, volume arity, volume range, version
/// arity and bounds, checksum.
pub fn validate_payload(
    payload: &ShareablePreset,
    now: DateTime<Utc>,
) -> Result<CanonicalPreset> {
    if payload.expires_at < now.timestamp() {
        return Err(SharingError::Expired);
    }

    if payload.version != SHARE_VERSION {
        return Err(SharingError::UnsupportedVersion);
    }

    if payload.volumes.len() != CHANNEL_COUNT {
        return Err(SharingError::InvalidDataSize);
    }

    for &volume in &payload.volumes {
        if !(0.0..=100.0).contains(&volume) {
            return Err(SharingError::InvalidVolumeRange);
        }
    }

    if let Some(versions) = &payload.versions {
        if versions.len() != CHANNEL_COUNT {
            return Err(SharingError::InvalidDataSize);
        }
        for (channel, &version) in versions.iter().enumerate() {
            if version < 0 || version > i64::from(max_version(channel)) {
                return Err(SharingError::InvalidVersionRange);
            }
        }
    }

    let versions_for_checksum = payload.versions.clone().unwrap_or_default();
    let expected = payload_checksum(
        &payload.name,
        &payload.volumes,
        &versions_for_checksum,
        payload.created_at,
    );
    if expected != payload.checksum {
        return Err(SharingError::ChecksumMismatch);
    }

    let mut volumes = [0.0f32; CHANNEL_COUNT];
    volumes.copy_from_slice(&payload.volumes);

    let mut versions = [0u8; CHANNEL_COUNT];
    if let Some(decoded) = &payload.versions {
        for (slot, &v) in versions.iter_mut().zip(decoded.iter()) {
            *slot = v as u8;
        }
    }

    debug!("✅ verbose payload validated: {:?}", payload.name);
    Ok(CanonicalPreset {
        name: payload.name.clone(),
        volumes,
        versions,
        emotion: payload.emotion.clone(),
        description: payload.description.clone(),
    })
}

/// Validate decoded compact fields and convert them into a canonical
/// preset, zero-padding legacy arities to 13 channels.
///
/// Compact codes carry no format version and no timestamps, so the expiry
/// and version checks do not apply; everything else mirrors the verbose
/// path.
pub fn validate_compact(decoded: &DecodedCompact) -> Result<CanonicalPreset> {
    let channels = decoded.generation.channel_count();

    if decoded.volumes.len() != channels || decoded.versions.len() != channels {
        return Err(SharingError::InvalidDataSize);
    }

    if decoded.volumes.iter().any(|&v| v > 100) {
        return Err(SharingError::InvalidVolumeRange);
    }

    // Mask channels have two variants in their generation's layout;
    // everything else must be at the default.
    for (channel, &version) in decoded.versions.iter().enumerate() {
        let allowed = u8::from(decoded.generation.mask_channels().contains(&channel));
        if version > allowed {
            return Err(SharingError::InvalidVersionRange);
        }
    }

    if !verify_compact(
        &decoded.checksum,
        &decoded.volumes,
        &decoded.versions,
        decoded.generation.checksum_schemes(),
    ) {
        return Err(SharingError::ChecksumMismatch);
    }

    let mut volumes = [0.0f32; CHANNEL_COUNT];
    for (slot, &v) in volumes.iter_mut().zip(decoded.volumes.iter()) {
        *slot = v as f32;
    }
    let mut versions = [0u8; CHANNEL_COUNT];
    for (slot, &v) in versions.iter_mut().zip(decoded.versions.iter()) {
        *slot = v;
    }

    debug!("✅ compact code validated ({:?})", decoded.generation);
    Ok(CanonicalPreset {
        name: COMPACT_PRESET_NAME.to_string(),
        volumes,
        versions,
        emotion: None,
        description: Some("Imported from a share code".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_payload(now: DateTime<Utc>) -> ShareablePreset {
        let preset = CanonicalPreset {
            name: "Focus".to_string(),
            volumes: [25.0; CHANNEL_COUNT],
            versions: [0; CHANNEL_COUNT],
            emotion: None,
            description: None,
        };
        ShareablePreset::build(&preset, now)
    }

    #[test]
    fn test_expired_payload_fails_before_checksum() {
        let now = Utc::now();
        let mut payload = valid_payload(now - Duration::hours(48));
        // Corrupt the checksum too: expiry must still win
        payload.checksum = "00000000".to_string();
        assert_eq!(
            validate_payload(&payload, now),
            Err(SharingError::Expired)
        );
    }

    #[test]
    fn test_unrecognized_version_is_rejected() {
        let now = Utc::now();
        let mut payload = valid_payload(now);
        payload.version = "v2.0".to_string();
        assert_eq!(
            validate_payload(&payload, now),
            Err(SharingError::UnsupportedVersion)
        );
    }

    #[test]
    fn test_wrong_arity_is_invalid_data_size() {
        let now = Utc::now();
        let mut payload = valid_payload(now);
        payload.volumes.pop();
        assert_eq!(
            validate_payload(&payload, now),
            Err(SharingError::InvalidDataSize)
        );

        let mut payload = valid_payload(now);
        if let Some(versions) = payload.versions.as_mut() {
            versions.push(0);
        }
        assert_eq!(
            validate_payload(&payload, now),
            Err(SharingError::InvalidDataSize)
        );
    }

    #[test]
    fn test_out_of_range_volume() {
        let now = Utc::now();
        let mut payload = valid_payload(now);
        payload.volumes[3] = 100.5;
        assert_eq!(
            validate_payload(&payload, now),
            Err(SharingError::InvalidVolumeRange)
        );

        let mut payload = valid_payload(now);
        payload.volumes[0] = -0.1;
        assert_eq!(
            validate_payload(&payload, now),
            Err(SharingError::InvalidVolumeRange)
        );
    }

    #[test]
    fn test_version_beyond_channel_catalog() {
        let now = Utc::now();
        let mut payload = valid_payload(now);
        if let Some(versions) = payload.versions.as_mut() {
            // channel 0 has a single variant
            versions[0] = 1;
        }
        assert_eq!(
            validate_payload(&payload, now),
            Err(SharingError::InvalidVersionRange)
        );
    }

    #[test]
    fn test_tampered_field_breaks_checksum() {
        let now = Utc::now();
        let mut payload = valid_payload(now);
        payload.name = "Renamed".to_string();
        assert_eq!(
            validate_payload(&payload, now),
            Err(SharingError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_flipped_checksum_character_is_rejected() {
        let now = Utc::now();
        let mut payload = valid_payload(now);
        let mut chars: Vec<char> = payload.checksum.chars().collect();
        chars[0] = if chars[0] == 'a' { 'b' } else { 'a' };
        payload.checksum = chars.into_iter().collect();
        assert_eq!(
            validate_payload(&payload, now),
            Err(SharingError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_missing_versions_validates_against_empty_list() {
        let now = Utc::now();
        let preset = CanonicalPreset {
            name: "Plain".to_string(),
            volumes: [10.0; CHANNEL_COUNT],
            versions: [0; CHANNEL_COUNT],
            emotion: None,
            description: None,
        };
        let mut payload = ShareablePreset::build(&preset, now);
        payload.versions = None;
        payload.checksum =
            payload_checksum(&payload.name, &payload.volumes, &[], payload.created_at);

        let decoded = validate_payload(&payload, now).unwrap();
        assert_eq!(decoded.versions, [0; CHANNEL_COUNT]);
    }

    #[test]
    fn test_payload_valid_at_exact_expiry_instant() {
        let now = Utc::now();
        let payload = valid_payload(now - Duration::hours(24));
        // expires_at == now passes; one second later fails
        assert!(validate_payload(&payload, now).is_ok());
        assert_eq!(
            validate_payload(&payload, now + Duration::seconds(1)),
            Err(SharingError::Expired)
        );
    }
}

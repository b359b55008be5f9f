//! Verbose link wire format: JSON + Base64 carried in a URI.
//!
//! The payload is a `ShareablePreset` serialized to JSON, Base64-encoded
//! and embedded as `emozleep://preset?data=<base64>`. Unlike the compact
//! code this format is lossless, versioned, and expires 24 hours after
//! encoding.
//!
//! Encoding uses the URL-safe Base64 alphabet so the payload passes the
//! input gate's character allow-list unmodified; decoding also accepts the
//! standard alphabet for payloads minted by older releases.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::exceptions::{Result, SharingError};
use crate::wire::checksums::payload_checksum;
use crate::wire::constants::{EXPIRATION_HOURS, MAX_CODE_LENGTH, SHARE_VERSION, URL_SCHEME};
use crate::wire::preset::CanonicalPreset;

/// Verbose wire payload.
///
/// The shape is closed: unknown fields are rejected so arbitrary JSON
/// cannot masquerade as a preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShareablePreset {
    /// Payload format version, e.g. "v1.0"
    pub version: String,
    /// Preset display name
    pub name: String,
    /// Per-channel volumes
    pub volumes: Vec<f32>,
    /// Per-channel version selectors, if the encoder recorded them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<i64>>,
    /// Emotion tag, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Encode timestamp, epoch seconds
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    /// Expiration timestamp, epoch seconds; fixed at encode time
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,
    /// 8 lowercase hex chars over the canonical fields
    pub checksum: String,
}

impl ShareablePreset {
    /// Build a stamped, checksummed payload from a canonical preset
    pub fn build(preset: &CanonicalPreset, now: DateTime<Utc>) -> Self {
        let created_at = now.timestamp();
        let expires_at = (now + Duration::hours(EXPIRATION_HOURS)).timestamp();
        let versions: Vec<i64> = preset.versions.iter().map(|&v| i64::from(v)).collect();
        let checksum = payload_checksum(&preset.name, &preset.volumes, &versions, created_at);

        ShareablePreset {
            version: SHARE_VERSION.to_string(),
            name: preset.name.clone(),
            volumes: preset.volumes.to_vec(),
            versions: Some(versions),
            emotion: preset.emotion.clone(),
            description: preset.description.clone(),
            created_at,
            expires_at,
            checksum,
        }
    }
}

/// Encode a preset as a share link.
///
/// Fails with `CodeTooLong` when the link would exceed the maximum share
/// code length; the caller falls back to the compact format.
pub fn encode_link(preset: &CanonicalPreset, now: DateTime<Utc>) -> Result<String> {
    let payload = ShareablePreset::build(preset, now);
    let json = serde_json::to_vec(&payload).map_err(|_| SharingError::EncodingFailed)?;
    let encoded = URL_SAFE.encode(json);
    let link = format!("{URL_SCHEME}://preset?data={encoded}");

    if link.len() > MAX_CODE_LENGTH {
        return Err(SharingError::CodeTooLong);
    }

    debug!("✅ share link generated for {:?} ({} chars)", payload.name, link.len());
    Ok(link)
}

/// Extract and decode the payload of a share link.
///
/// Extraction failures are `InvalidFormat`; JSON-level failures are
/// `CorruptedData`. Validation is the caller's next step.
pub fn decode_link(link: &str) -> Result<ShareablePreset> {
    let data = extract_data_param(link).ok_or(SharingError::InvalidFormat)?;
    decode_base64(data)
}

/// Decode a bare Base64 payload (the fall-through path for input that is
/// neither a link nor a compact code)
pub fn decode_base64(data: &str) -> Result<ShareablePreset> {
    let bytes = URL_SAFE
        .decode(data)
        .or_else(|_| STANDARD.decode(data))?;
    let payload: ShareablePreset = serde_json::from_slice(&bytes)?;
    debug!("verbose payload decoded: {:?}", payload.name);
    Ok(payload)
}

/// Pull the `data` query parameter out of `scheme://preset?data=...`
fn extract_data_param(link: &str) -> Option<&str> {
    let rest = link.strip_prefix(URL_SCHEME)?.strip_prefix("://")?;
    let (host, query) = rest.split_once('?')?;
    if host != "preset" {
        return None;
    }
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("data="))
        .filter(|value| !value.is_empty())
}

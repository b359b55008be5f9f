//! Checksum schemes used by the wire formats.
//!
//! The verbose payload carries an 8-hex-digit truncated SHA-256 over its
//! canonical fields. Compact codes carry 2 characters: current-generation
//! codes always use a truncated SHA-256, while legacy codes were minted
//! under two different encoder revisions and may carry either a decimal
//! sum-mod-100 or the truncated hash. Decoders therefore verify against an
//! ordered list of candidate schemes.

use sha2::{Digest, Sha256};

use crate::wire::constants::{COMPACT_CHECKSUM_LEN, PAYLOAD_CHECKSUM_LEN};

/// Checksum schemes a compact code may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactScheme {
    /// Decimal sum of the integer volumes, mod 100, zero-padded to 2 digits
    DecimalSum,
    /// First 2 hex digits of SHA-256 over the integer volumes and versions
    TruncatedHash,
}

/// Schemes accepted for a legacy code, in verification order
pub const LEGACY_SCHEMES: [CompactScheme; 2] =
    [CompactScheme::DecimalSum, CompactScheme::TruncatedHash];

/// Schemes accepted for a current-generation code
pub const CURRENT_SCHEMES: [CompactScheme; 1] = [CompactScheme::TruncatedHash];

fn truncated_sha256(input: &str, hex_len: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut out = hex::encode(digest);
    out.truncate(hex_len);
    out
}

/// Checksum over the canonical fields of a verbose payload:
/// `name|v1,v2,…|ver1,ver2,…|created_at` with volumes rendered to two
/// decimal places and `created_at` in epoch seconds.
pub fn payload_checksum(name: &str, volumes: &[f32], versions: &[i64], created_at: i64) -> String {
    let volume_str = volumes
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect::<Vec<_>>()
        .join(",");
    let version_str = versions
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let data = format!("{name}|{volume_str}|{version_str}|{created_at}");
    truncated_sha256(&data, PAYLOAD_CHECKSUM_LEN)
}

/// Truncated-hash checksum of a compact code, computed over the
/// dequantized integer volumes and raw version selectors in channel order.
pub fn compact_hash_checksum(volumes: &[u32], versions: &[u8]) -> String {
    let volume_str = volumes
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let version_str = versions
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    truncated_sha256(
        &format!("{volume_str}|{version_str}"),
        COMPACT_CHECKSUM_LEN,
    )
}

/// Decimal sum-mod-100 checksum used by the earliest compact encoder
pub fn compact_sum_checksum(volumes: &[u32]) -> String {
    let sum: u32 = volumes.iter().sum();
    format!("{:02}", sum % 100)
}

/// Verify a compact checksum against an ordered list of candidate schemes.
/// Returns true as soon as any scheme matches.
pub fn verify_compact(
    provided: &str,
    volumes: &[u32],
    versions: &[u8],
    schemes: &[CompactScheme],
) -> bool {
    schemes.iter().any(|scheme| match scheme {
        CompactScheme::DecimalSum => provided == compact_sum_checksum(volumes),
        CompactScheme::TruncatedHash => {
            provided.eq_ignore_ascii_case(&compact_hash_checksum(volumes, versions))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_checksum_is_8_lowercase_hex() {
        let c = payload_checksum("Night", &[50.0, 0.0], &[0, 1], 1_700_000_000);
        assert_eq!(c.len(), 8);
        assert!(c.chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()));
    }

    #[test]
    fn test_payload_checksum_depends_on_every_field() {
        let base = payload_checksum("Night", &[50.0], &[0], 1_700_000_000);
        assert_ne!(base, payload_checksum("Day", &[50.0], &[0], 1_700_000_000));
        assert_ne!(base, payload_checksum("Night", &[50.01], &[0], 1_700_000_000));
        assert_ne!(base, payload_checksum("Night", &[50.0], &[1], 1_700_000_000));
        assert_ne!(base, payload_checksum("Night", &[50.0], &[0], 1_700_000_001));
    }

    #[test]
    fn test_sum_checksum_wraps_at_100() {
        assert_eq!(compact_sum_checksum(&[48, 28, 68, 40, 20]), "04");
        assert_eq!(compact_sum_checksum(&[0, 0, 0]), "00");
        assert_eq!(compact_sum_checksum(&[99, 1]), "00");
    }

    #[test]
    fn test_verify_compact_tries_schemes_in_order() {
        let volumes = [48u32, 28, 68];
        let versions = [0u8, 1, 0];

        let sum = compact_sum_checksum(&volumes);
        let hash = compact_hash_checksum(&volumes, &versions);

        assert!(verify_compact(&sum, &volumes, &versions, &LEGACY_SCHEMES));
        assert!(verify_compact(&hash, &volumes, &versions, &LEGACY_SCHEMES));
        // Current generation only accepts the hash scheme
        assert!(verify_compact(&hash, &volumes, &versions, &CURRENT_SCHEMES));
        if sum != hash {
            assert!(!verify_compact(&sum, &volumes, &versions, &CURRENT_SCHEMES));
        }
    }

    #[test]
    fn test_hash_checksum_case_insensitive_compare() {
        let volumes = [10u32, 20];
        let versions = [0u8, 0];
        let hash = compact_hash_checksum(&volumes, &versions).to_uppercase();
        assert!(verify_compact(&hash, &volumes, &versions, &CURRENT_SCHEMES));
    }
}

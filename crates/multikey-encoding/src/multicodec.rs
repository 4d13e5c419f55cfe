//! Multicodec tag for Ed25519 public keys
//!
//! Multicodec is a self-describing format that prefixes data with an
//! identifier for the type of data that follows. Only the Ed25519
//! public key codec is supported here.
//!
//! See: <https://github.com/multiformats/multicodec>

use crate::EncodingError;

/// Multicodec prefix for an Ed25519 public key (0xed as an unsigned varint)
///
/// See: <https://github.com/multiformats/multicodec/blob/master/table.csv>
pub const ED25519_PUB: [u8; 2] = [0xed, 0x01];

/// Length of a raw Ed25519 public key
pub const RAW_KEY_LENGTH: usize = 32;

/// Length of a tagged payload: the codec prefix followed by the raw key
pub const TAGGED_PAYLOAD_LENGTH: usize = ED25519_PUB.len() + RAW_KEY_LENGTH;

/// Prefix raw Ed25519 public key bytes with the multicodec tag
pub fn tag_ed25519_pub(raw: &[u8]) -> Result<[u8; TAGGED_PAYLOAD_LENGTH], EncodingError> {
    if raw.len() != RAW_KEY_LENGTH {
        return Err(EncodingError::InvalidKeyLength(raw.len()));
    }

    let mut payload = [0u8; TAGGED_PAYLOAD_LENGTH];
    payload[..ED25519_PUB.len()].copy_from_slice(&ED25519_PUB);
    payload[ED25519_PUB.len()..].copy_from_slice(raw);
    Ok(payload)
}

/// Separate the codec tag from the raw key, validating both
pub fn strip_ed25519_pub(payload: &[u8]) -> Result<[u8; RAW_KEY_LENGTH], EncodingError> {
    if payload.len() != TAGGED_PAYLOAD_LENGTH {
        return Err(EncodingError::InvalidPayloadLength(payload.len()));
    }
    if payload[..ED25519_PUB.len()] != ED25519_PUB {
        return Err(EncodingError::UnsupportedMulticodec(payload[0], payload[1]));
    }

    let mut raw = [0u8; RAW_KEY_LENGTH];
    raw.copy_from_slice(&payload[ED25519_PUB.len()..]);
    Ok(raw)
}

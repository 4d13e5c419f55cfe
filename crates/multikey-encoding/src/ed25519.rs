//! Ed25519 key object reconstruction

use ed25519_dalek::VerifyingKey;

use crate::EncodingError;
use crate::multibase::decode_multikey;
use crate::multicodec::RAW_KEY_LENGTH;

/// Reconstruct an Ed25519 verifying key from raw public key bytes
pub fn verifying_key(raw: &[u8; RAW_KEY_LENGTH]) -> Result<VerifyingKey, EncodingError> {
    VerifyingKey::from_bytes(raw)
        .map_err(|e| EncodingError::KeyError(format!("Couldn't create Ed25519 VerifyingKey: {e}")))
}

/// Decode a multikey string into an Ed25519 verifying key
///
/// The reconstructed key's bytes are identical to the raw bytes the
/// multikey was encoded from.
pub fn verifying_key_from_multikey(multikey: &str) -> Result<VerifyingKey, EncodingError> {
    verifying_key(&decode_multikey(multikey)?)
}

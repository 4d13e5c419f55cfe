//! Multibase encoding/decoding utilities
//!
//! Multibase is a protocol for self-describing base encodings.
//! The first character indicates the encoding used; only base58btc
//! ('z') is supported here.
//!
//! See: <https://github.com/multiformats/multibase>

use crate::EncodingError;
use crate::multicodec::{self, RAW_KEY_LENGTH};

/// Multibase prefix for base58btc (Bitcoin alphabet)
pub const BASE58BTC_PREFIX: char = 'z';

/// Decode a base58btc multibase string (must start with 'z')
///
/// Returns the decoded bytes without the prefix.
pub fn decode_base58btc(s: &str) -> Result<Vec<u8>, EncodingError> {
    let Some(encoded) = s.strip_prefix(BASE58BTC_PREFIX) else {
        let prefix = s.chars().next().unwrap_or('\0');
        return Err(EncodingError::InvalidEncoding(format!(
            "expected multibase prefix '{BASE58BTC_PREFIX}' (base58btc), got '{prefix}'"
        )));
    };

    bs58::decode(encoded)
        .into_vec()
        .map_err(|e| EncodingError::InvalidEncoding(e.to_string()))
}

/// Encode bytes as base58btc with multibase prefix 'z'
pub fn encode_base58btc(bytes: &[u8]) -> String {
    format!("{}{}", BASE58BTC_PREFIX, bs58::encode(bytes).into_string())
}

/// Validate that a string is valid base58btc multibase (starts with 'z' and decodes correctly)
pub fn validate_base58btc(s: &str) -> Result<(), EncodingError> {
    decode_base58btc(s)?;
    Ok(())
}

/// Encode raw Ed25519 public key bytes as a multikey string
///
/// The key bytes are prefixed with the Ed25519 multicodec tag and
/// base58btc encoded. The result is suitable for use as a
/// `publicKeyMultibase` value in a DID document.
pub fn encode_multikey(raw: &[u8]) -> Result<String, EncodingError> {
    let payload = multicodec::tag_ed25519_pub(raw)?;
    Ok(encode_base58btc(&payload))
}

/// Decode a multikey string (multibase + multicodec encoded)
///
/// Returns just the key bytes without the multicodec prefix.
/// This is the inverse of `encode_multikey`.
pub fn decode_multikey(key: &str) -> Result<[u8; RAW_KEY_LENGTH], EncodingError> {
    let bytes = decode_base58btc(key)?;
    multicodec::strip_ed25519_pub(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multicodec::{ED25519_PUB, TAGGED_PAYLOAD_LENGTH};

    #[test]
    fn test_decode_base58btc() {
        // "z" + base58btc("hello") = "zCn8eVZg"
        let result = decode_base58btc("zCn8eVZg").unwrap();
        assert_eq!(result, b"hello");
    }

    #[test]
    fn test_encode_base58btc() {
        let encoded = encode_base58btc(b"hello");
        assert_eq!(encoded, "zCn8eVZg");
    }

    #[test]
    fn test_roundtrip() {
        let original = b"test data for encoding";
        let encoded = encode_base58btc(original);
        let decoded = decode_base58btc(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_invalid_prefix() {
        let result = decode_base58btc("fABCDEF"); // 'f' is hex, not base58btc
        assert!(matches!(
            result.unwrap_err(),
            EncodingError::InvalidEncoding(_)
        ));
    }

    #[test]
    fn test_empty_string() {
        assert!(matches!(
            decode_base58btc("").unwrap_err(),
            EncodingError::InvalidEncoding(_)
        ));
    }

    #[test]
    fn test_invalid_base58() {
        // '0', 'O', 'I', 'l' are not valid base58 characters
        let result = decode_base58btc("z0OIl");
        assert!(matches!(
            result.unwrap_err(),
            EncodingError::InvalidEncoding(_)
        ));
    }

    #[test]
    fn test_did_key_identifier() {
        // Real did:key identifier (ed25519)
        let id = "z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK";
        let bytes = decode_base58btc(id).unwrap();
        assert_eq!(bytes.len(), TAGGED_PAYLOAD_LENGTH);
        // First byte should be 0xed (ed25519 multicodec prefix)
        assert_eq!(bytes[0], 0xed);

        let raw = decode_multikey(id).unwrap();
        assert_eq!(raw.len(), RAW_KEY_LENGTH);
    }

    #[test]
    fn test_encode_multikey_sequential_bytes() {
        let raw: Vec<u8> = (0u8..32).collect();
        let multikey = encode_multikey(&raw).unwrap();
        assert!(multikey.starts_with(BASE58BTC_PREFIX));

        let payload = decode_base58btc(&multikey).unwrap();
        assert_eq!(payload.len(), TAGGED_PAYLOAD_LENGTH);
        assert_eq!(payload[..2], ED25519_PUB);
        assert_eq!(payload[2..], raw);
    }

    #[test]
    fn test_multikey_roundtrip() {
        for raw in [[0u8; RAW_KEY_LENGTH], [0xffu8; RAW_KEY_LENGTH], [42u8; RAW_KEY_LENGTH]] {
            let multikey = encode_multikey(&raw).unwrap();
            assert_eq!(decode_multikey(&multikey).unwrap(), raw);
        }
    }

    #[test]
    fn test_encode_multikey_rejects_wrong_length() {
        assert!(matches!(
            encode_multikey(&[0u8; 31]).unwrap_err(),
            EncodingError::InvalidKeyLength(31)
        ));
        assert!(matches!(
            encode_multikey(&[0u8; 33]).unwrap_err(),
            EncodingError::InvalidKeyLength(33)
        ));
    }

    #[test]
    fn test_decode_multikey_rejects_foreign_codec() {
        // Validly encoded 34-byte payload carrying the X25519 codec
        let mut payload = vec![0xec, 0x01];
        payload.extend_from_slice(&[9u8; RAW_KEY_LENGTH]);
        let multikey = encode_base58btc(&payload);

        assert!(matches!(
            decode_multikey(&multikey).unwrap_err(),
            EncodingError::UnsupportedMulticodec(0xec, 0x01)
        ));
    }

    #[test]
    fn test_decode_multikey_rejects_wrong_payload_length() {
        let mut payload = ED25519_PUB.to_vec();
        payload.extend_from_slice(&[9u8; RAW_KEY_LENGTH + 1]);
        let multikey = encode_base58btc(&payload);

        assert!(matches!(
            decode_multikey(&multikey).unwrap_err(),
            EncodingError::InvalidPayloadLength(35)
        ));
    }
}

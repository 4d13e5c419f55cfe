//! Multibase and multicodec encoding for Ed25519 public keys
//!
//! This crate converts an Ed25519 public key between a PEM public key
//! container and its multikey form (the `publicKeyMultibase` value used
//! in DID documents):
//! - Multibase encoding/decoding (base58btc only)
//! - The Ed25519 public key multicodec tag
//! - PEM container parsing down to the raw key bytes

pub mod multibase;
pub mod multicodec;
pub mod pem;

#[cfg(feature = "ed25519")]
pub mod ed25519;

pub use multibase::{
    BASE58BTC_PREFIX, decode_base58btc, decode_multikey, encode_base58btc, encode_multikey,
    validate_base58btc,
};
pub use multicodec::{ED25519_PUB, RAW_KEY_LENGTH, TAGGED_PAYLOAD_LENGTH};
pub use pem::decode_public_key_pem;

mod error;
pub use error::EncodingError;

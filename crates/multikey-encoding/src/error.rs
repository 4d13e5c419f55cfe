//! Encoding errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Malformed public key container: {0}")]
    MalformedContainer(String),

    #[error("Unsupported key algorithm: expected id-Ed25519 (1.3.101.112), got {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid raw key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("Invalid multibase encoding: {0}")]
    InvalidEncoding(String),

    #[error("Invalid multikey payload length: expected 34 bytes, got {0}")]
    InvalidPayloadLength(usize),

    #[error("Unsupported multicodec tag: expected 0xed01, got 0x{0:02x}{1:02x}")]
    UnsupportedMulticodec(u8, u8),

    #[error("Key error: {0}")]
    KeyError(String),
}

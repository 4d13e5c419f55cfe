//! PEM public key container parsing
//!
//! Extracts the raw Ed25519 key bytes from a PEM-wrapped
//! SubjectPublicKeyInfo structure (RFC 5280, RFC 8410).

use crate::EncodingError;
use crate::multicodec::RAW_KEY_LENGTH;
use spki::der::pem::PemLabel;
use spki::{Document, ObjectIdentifier, SubjectPublicKeyInfoRef};

/// Algorithm identifier for id-Ed25519 (RFC 8410)
pub const ED25519_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

/// Extract the raw Ed25519 public key from a PEM container
///
/// The container must be a `PUBLIC KEY` PEM document holding a DER
/// SubjectPublicKeyInfo whose algorithm is id-Ed25519.
pub fn decode_public_key_pem(pem: &str) -> Result<[u8; RAW_KEY_LENGTH], EncodingError> {
    let (label, doc) = Document::from_pem(pem)
        .map_err(|e| EncodingError::MalformedContainer(format!("PEM parse failed: {e}")))?;
    SubjectPublicKeyInfoRef::validate_pem_label(label).map_err(|_| {
        EncodingError::MalformedContainer(format!("unexpected PEM label: {label}"))
    })?;

    let spki: SubjectPublicKeyInfoRef = doc
        .decode_msg()
        .map_err(|e| EncodingError::MalformedContainer(format!("DER parse failed: {e}")))?;

    if spki.algorithm.oid != ED25519_OID {
        return Err(EncodingError::UnsupportedAlgorithm(
            spki.algorithm.oid.to_string(),
        ));
    }
    // RFC 8410: the parameters field must be absent for id-Ed25519
    if spki.algorithm.parameters.is_some() {
        return Err(EncodingError::MalformedContainer(
            "unexpected algorithm parameters for id-Ed25519".into(),
        ));
    }

    let raw = spki.subject_public_key.as_bytes().ok_or_else(|| {
        EncodingError::MalformedContainer("public key BIT STRING has unused bits".into())
    })?;

    raw.try_into()
        .map_err(|_| EncodingError::InvalidKeyLength(raw.len()))
}

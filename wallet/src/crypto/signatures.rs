//! # Signature Verification
//!
//! Since an address is the public key, anyone can check a signature against
//! an address without asking the network for anything.
//!
//! ## Strictness
//!
//! We use `verify_strict`, which rejects small-order keys and malleable
//! signatures that lenient verifiers accept. Signatures we produce always
//! pass; hand-crafted edge cases don't.

use ed25519_dalek::VerifyingKey;
use thiserror::Error;

use super::keys::{KeyMaterial, Signature};
use crate::address::Address;

/// Errors during signature verification.
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("signature verification failed")]
    VerificationFailed,

    #[error("address is not a valid Ed25519 public key")]
    InvalidPublicKey,
}

/// Sign a message with the given key.
pub fn sign(key: &KeyMaterial, message: &[u8]) -> Signature {
    key.sign(message)
}

/// Verify a signature against an address. Returns `false` on any failure.
pub fn verify(address: &Address, message: &[u8], signature: &Signature) -> bool {
    verify_strict(address, message, signature).is_ok()
}

/// Like [`verify`], but says which step failed.
pub fn verify_strict(
    address: &Address,
    message: &[u8],
    signature: &Signature,
) -> Result<(), SignatureError> {
    let verifying_key =
        VerifyingKey::from_bytes(address.as_bytes()).map_err(|_| SignatureError::InvalidPublicKey)?;

    verifying_key
        .verify_strict(message, &signature.to_dalek())
        .map_err(|_| SignatureError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_verify_roundtrip() {
        let km = KeyMaterial::generate();
        let sig = sign(&km, b"transfer");
        assert!(verify(km.address(), b"transfer", &sig));
    }

    #[test]
    fn wrong_message_fails_verification() {
        let km = KeyMaterial::generate();
        let sig = sign(&km, b"correct message");
        assert!(!verify(km.address(), b"wrong message", &sig));
    }

    #[test]
    fn wrong_address_fails_verification() {
        let a = KeyMaterial::generate();
        let b = KeyMaterial::generate();
        let sig = sign(&a, b"message");
        assert!(matches!(
            verify_strict(b.address(), b"message", &sig),
            Err(SignatureError::VerificationFailed)
        ));
    }

    #[test]
    fn tampered_signature_fails() {
        let km = KeyMaterial::generate();
        let mut bytes = *sign(&km, b"message").as_bytes();
        bytes[0] ^= 0xff;
        assert!(!verify(km.address(), b"message", &Signature::from_bytes(bytes)));
    }
}

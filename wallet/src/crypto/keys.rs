//! # Key Material
//!
//! An Ed25519 keypair plus the account address it controls.
//!
//! Every importer ([`crate::import`]) ends in the same place: 32 bytes of
//! secret seed handed to [`KeyMaterial::from_private_key`]. From there the
//! public key is re-derived by ed25519-dalek and bech32-encoded into the
//! address, so the address is always consistent with the secret.
//!
//! ## Security considerations
//!
//! - The dalek `SigningKey` zeroizes itself on drop.
//! - `Debug` prints the address only. Never the secret, not even partially.
//! - There is deliberately no `Serialize` impl. Exporting a secret goes
//!   through [`crate::secret`], [`crate::import::pem`] or
//!   [`crate::import::keystore`], each of which is an explicit act.

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

use crate::address::Address;
use crate::config::{PRIVATE_KEY_LENGTH, SIGNATURE_LENGTH};

/// Errors that can occur during key operations.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key bytes: expected {PRIVATE_KEY_LENGTH} bytes")]
    InvalidSecretKey,
}

/// The signing identity of one account.
///
/// # Examples
///
/// ```
/// use elrond_wallet::crypto::KeyMaterial;
///
/// let km = KeyMaterial::generate();
/// let sig = km.sign(b"hello");
/// assert!(elrond_wallet::crypto::verify(km.address(), b"hello", &sig));
/// ```
pub struct KeyMaterial {
    signing_key: SigningKey,
    address: Address,
}

impl KeyMaterial {
    /// Generate a fresh key using the OS cryptographic RNG.
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::generate(&mut OsRng))
    }

    /// Constructs key material from a 32-byte Ed25519 seed.
    pub fn from_private_key(seed: &[u8; PRIVATE_KEY_LENGTH]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(seed))
    }

    /// Like [`from_private_key`](Self::from_private_key), from a slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        let seed: &[u8; PRIVATE_KEY_LENGTH] =
            bytes.try_into().map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_private_key(seed))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let address = Address::from_public_key(signing_key.verifying_key().to_bytes());
        Self {
            signing_key,
            address,
        }
    }

    /// The account this key controls.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// The 32-byte public key. Same bytes as the address.
    pub fn public_key(&self) -> [u8; 32] {
        *self.address.as_bytes()
    }

    /// Exports the raw 32-byte secret seed.
    ///
    /// **Handle with care.** Whoever holds these bytes controls the account.
    pub fn private_key_bytes(&self) -> [u8; PRIVATE_KEY_LENGTH] {
        self.signing_key.to_bytes()
    }

    /// The `secret ‖ public` layout used by PEM and keystore files.
    pub fn extended_bytes(&self) -> [u8; PRIVATE_KEY_LENGTH * 2] {
        let mut out = [0u8; PRIVATE_KEY_LENGTH * 2];
        out[..PRIVATE_KEY_LENGTH].copy_from_slice(&self.private_key_bytes());
        out[PRIVATE_KEY_LENGTH..].copy_from_slice(self.address.as_bytes());
        out
    }

    /// Sign a message. Deterministic: same key and message, same signature.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature::from_bytes(self.signing_key.sign(message).to_bytes())
    }
}

impl Clone for KeyMaterial {
    fn clone(&self) -> Self {
        Self::from_private_key(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyMaterial({})", self.address)
    }
}

impl PartialEq for KeyMaterial {
    /// Compares public keys, never secrets.
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for KeyMaterial {}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// A 64-byte Ed25519 signature. Shown as 128 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    bytes: [u8; SIGNATURE_LENGTH],
}

impl Signature {
    /// Create a signature from its raw bytes.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.bytes
    }

    pub(crate) fn to_dalek(self) -> DalekSignature {
        DalekSignature::from_bytes(&self.bytes)
    }

    /// Lowercase hex. 128 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a hex-encoded signature.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self { bytes })
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = self.to_hex();
        write!(f, "Signature({}...{})", &hex_str[..8], &hex_str[120..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE_SECRET: &str = "413f42575f7f26fad3317a778771212fdb80245850981e48b58a4f25e344e8f9";
    const ALICE_ADDRESS: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";

    fn alice() -> KeyMaterial {
        KeyMaterial::from_slice(&hex::decode(ALICE_SECRET).unwrap()).unwrap()
    }

    #[test]
    fn known_secret_gives_known_address() {
        assert_eq!(alice().address().to_bech32(), ALICE_ADDRESS);
    }

    #[test]
    fn signing_is_deterministic() {
        let km = alice();
        assert_eq!(km.sign(b"msg"), km.sign(b"msg"));
        assert_ne!(km.sign(b"msg"), km.sign(b"msg2"));
    }

    #[test]
    fn test_roundtrip_bytes() {
        let km = KeyMaterial::generate();
        let restored = KeyMaterial::from_private_key(&km.private_key_bytes());
        assert_eq!(km, restored);
    }

    #[test]
    fn extended_bytes_are_secret_then_public() {
        let km = alice();
        let ext = km.extended_bytes();
        assert_eq!(&ext[..32], &km.private_key_bytes());
        assert_eq!(&ext[32..], km.address().as_bytes());
        assert_eq!(KeyMaterial::from_slice(&ext[..32]).unwrap(), km);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(
            KeyMaterial::from_slice(&[0u8; 31]),
            Err(KeyError::InvalidSecretKey)
        ));
        assert!(matches!(
            KeyMaterial::from_slice(&[0u8; 64]),
            Err(KeyError::InvalidSecretKey)
        ));
    }

    #[test]
    fn two_generated_keys_differ() {
        assert_ne!(KeyMaterial::generate(), KeyMaterial::generate());
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let km = alice();
        let debug_str = format!("{:?}", km);
        assert!(debug_str.starts_with("KeyMaterial(erd1"));
        assert!(!debug_str.contains(ALICE_SECRET));
    }

    #[test]
    fn test_signature_hex_roundtrip() {
        let sig = alice().sign(b"test");
        assert_eq!(sig.to_hex().len(), 128);
        assert_eq!(Signature::from_hex(&sig.to_hex()).unwrap(), sig);
        assert!(Signature::from_hex("abcd").is_err());
    }
}

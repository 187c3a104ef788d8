//! # Serialized Secrets
//!
//! A compact, copy/paste-friendly backup of one private key:
//!
//! ```text
//! 88e0c74c...a48d81e0 c1452124
//! └── hex(secret) ──┘ └ tag ┘
//!     64 chars         8 chars = hex(sha256(payload chars)[..4])
//! ```
//!
//! The tag catches damage, not attackers. Four bytes of SHA-256 means a
//! mangled string slips through about once in four billion tries, and anyone
//! who can edit the string can recompute the tag.
//!
//! ## What the tag covers
//!
//! The tag is read at a fixed offset right after the payload. So:
//!
//! - drop a character, or add one in front: the tag lands on the wrong
//!   characters and the string is rejected;
//! - add characters *after* the tag: nothing looks at them, and the string
//!   still decodes to the same key.
//!
//! That second case is old behavior that existing backups may depend on, so
//! it stays, and the tests below pin it.

use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::config::{PRIVATE_KEY_LENGTH, SECRET_PAYLOAD_CHARS, SECRET_TAG_BYTES, SECRET_TAG_CHARS};
use crate::crypto::{sha256_array, KeyMaterial};

#[derive(Debug, Error)]
pub enum SecretError {
    /// Wrong length, not hex, or the tag doesn't match.
    #[error("serialized secret is corrupted")]
    Corrupted,
}

fn tag_of(payload: &str) -> String {
    hex::encode(&sha256_array(payload.as_bytes())[..SECRET_TAG_BYTES])
}

/// Split into (payload, tag) without panicking on short or non-ASCII input.
fn split(s: &str) -> Option<(&str, &str)> {
    let payload = s.get(..SECRET_PAYLOAD_CHARS)?;
    let tag = s.get(SECRET_PAYLOAD_CHARS..SECRET_PAYLOAD_CHARS + SECRET_TAG_CHARS)?;
    Some((payload, tag))
}

/// Serialize a key. Always 72 lowercase hex characters.
pub fn serialize(key: &KeyMaterial) -> String {
    let payload = Zeroizing::new(hex::encode(key.private_key_bytes()));
    let tag = tag_of(&payload);
    format!("{}{}", payload.as_str(), tag)
}

/// Cheap integrity check. Never panics and never builds key material.
pub fn can_deserialize(s: &str) -> bool {
    let Some((payload, tag)) = split(s) else {
        return false;
    };
    if !payload.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    tag_of(payload).as_bytes().ct_eq(tag.as_bytes()).into()
}

/// Rebuild the key from a serialized secret.
pub fn deserialize(s: &str) -> Result<KeyMaterial, SecretError> {
    if !can_deserialize(s) {
        return Err(SecretError::Corrupted);
    }
    let (payload, _) = split(s).ok_or(SecretError::Corrupted)?;
    let mut secret = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
    hex::decode_to_slice(payload, secret.as_mut_slice()).map_err(|_| SecretError::Corrupted)?;
    Ok(KeyMaterial::from_private_key(&secret))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "fringe dry little minor note hundred lottery garment announce space throw captain seven slim common piece blame battle void pistol diagram melody phone mother";
    const SERIALIZED: &str =
        "88e0c74c2f85f3c52b285fbdf27bfa1ee392a4eff5e072727d7b7690a48d81e0c1452124";

    fn key() -> KeyMaterial {
        KeyMaterial::from_mnemonic(PHRASE, 0).unwrap()
    }

    #[test]
    fn serializes_known_key() {
        let s = serialize(&key());
        assert_eq!(s, SERIALIZED);
        assert_eq!(s.len(), SECRET_PAYLOAD_CHARS + SECRET_TAG_CHARS);
    }

    #[test]
    fn roundtrip_restores_private_key() {
        let km = KeyMaterial::generate();
        let restored = deserialize(&serialize(&km)).unwrap();
        assert_eq!(restored.private_key_bytes(), km.private_key_bytes());
    }

    #[test]
    fn truncation_is_detected() {
        let short = &SERIALIZED[..SERIALIZED.len() - 1];
        assert!(!can_deserialize(short));
        assert!(matches!(deserialize(short), Err(SecretError::Corrupted)));
    }

    #[test]
    fn prefixed_character_is_detected() {
        let prefixed = format!("d{SERIALIZED}");
        assert!(!can_deserialize(&prefixed));
        assert!(deserialize(&prefixed).is_err());
    }

    #[test]
    fn appended_character_is_not_detected() {
        let appended = format!("{SERIALIZED}d");
        assert!(can_deserialize(&appended));
        assert_eq!(deserialize(&appended).unwrap(), key());
    }

    #[test]
    fn flipped_payload_character_is_detected() {
        let flipped = format!("0{}", &SERIALIZED[1..]);
        assert!(!can_deserialize(&flipped));
    }

    #[test]
    fn flipped_tag_character_is_detected() {
        let flipped = format!("{}5", &SERIALIZED[..SERIALIZED.len() - 1]);
        assert!(!can_deserialize(&flipped));
    }

    #[test]
    fn garbage_never_panics() {
        let inputs = [
            String::new(),
            "zz".to_string(),
            "é".repeat(40),
            "g".repeat(72),
            "ü".repeat(36),
        ];
        for s in &inputs {
            assert!(!can_deserialize(s));
            assert!(deserialize(s).is_err());
        }
    }
}

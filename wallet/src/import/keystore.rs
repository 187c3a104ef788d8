//! # Keystore Import & Export
//!
//! Password-protected JSON key files, the format written by the Elrond web
//! wallet and `erdpy`:
//!
//! ```json
//! {
//!   "version": 4,
//!   "id": "<uuid v4>",
//!   "address": "<hex public key>",
//!   "bech32": "erd1...",
//!   "crypto": {
//!     "ciphertext": "<hex>",
//!     "cipherparams": { "iv": "<hex, 16 bytes>" },
//!     "cipher": "aes-128-ctr",
//!     "kdf": "scrypt",
//!     "kdfparams": { "dklen": 32, "salt": "<hex>", "n": 4096, "r": 8, "p": 1 },
//!     "mac": "<hex, 32 bytes>"
//!   }
//! }
//! ```
//!
//! ## Decryption
//!
//! 1. `derived = scrypt(password, salt, n, r, p, dklen)`
//! 2. `HMAC-SHA256(derived[16..32], ciphertext)` must equal `mac`, compared
//!    in constant time. A mismatch means wrong password *or* a damaged file;
//!    we can't tell the two apart and the error doesn't pretend to.
//! 3. `plaintext = AES-128-CTR(derived[0..16], iv, ciphertext)`. The first
//!    32 bytes are the secret seed. Elrond tools append the 32-byte public key.
//!
//! Everything structural (missing fields, bad hex, an unknown cipher, silly
//! scrypt parameters) is rejected as [`KeystoreError::Malformed`] *before*
//! running scrypt. A file with `n = 2^40`, or a small `n` with a huge `r`,
//! should fail fast, not eat the machine: scrypt memory (`128 * n * r`) is
//! capped at 1 GiB, `p` at 16 and `dklen` at 64.

use aes::Aes128;
use cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::config::{
    EXTENDED_SECRET_LENGTH, KEYSTORE_AES_KEY_LENGTH, KEYSTORE_CIPHER, KEYSTORE_DKLEN,
    KEYSTORE_IV_LENGTH, KEYSTORE_KDF, KEYSTORE_SALT_LENGTH, KEYSTORE_SCRYPT_N, KEYSTORE_SCRYPT_P,
    KEYSTORE_SCRYPT_R, KEYSTORE_VERSION, PRIVATE_KEY_LENGTH,
};
use crate::crypto::KeyMaterial;
use crate::error::ErrorKind;

type Aes128Ctr = Ctr128BE<Aes128>;
type HmacSha256 = Hmac<Sha256>;

/// Upper bound on `log2(n)` we are willing to run. 2^20 already takes
/// seconds and a gigabyte of memory with r = 8.
const MAX_SCRYPT_LOG_N: u32 = 20;

/// Upper bound on scrypt working memory, `128 * n * r` bytes.
const MAX_SCRYPT_MEMORY: u64 = 1 << 30;

/// Upper bound on scrypt parallelization.
const MAX_SCRYPT_P: u32 = 16;

/// Upper bound on the derived key length. Only the first 32 bytes are used.
const MAX_DKLEN: usize = 64;

/// Errors that can occur while reading or writing a keystore.
#[derive(Debug, Error)]
pub enum KeystoreError {
    /// Structurally invalid keystore. Nothing was decrypted.
    #[error("malformed keystore: {0}")]
    Malformed(String),

    /// MAC mismatch: wrong password, or the file was damaged.
    #[error("wrong password or corrupted keystore")]
    InvalidPassword,

    /// scrypt itself failed.
    #[error("key derivation failed: {0}")]
    Kdf(String),

    /// Writing the keystore JSON failed.
    #[error("keystore serialization failed: {0}")]
    Serialization(String),
}

impl KeystoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KeystoreError::InvalidPassword => ErrorKind::Authentication,
            _ => ErrorKind::Validation,
        }
    }
}

// ---------------------------------------------------------------------------
// File format
// ---------------------------------------------------------------------------

/// A keystore file, exactly as it appears on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keystore {
    pub version: u32,
    /// Optional in files written by older tools.
    #[serde(default)]
    pub id: String,
    /// Hex public key. Informational only.
    #[serde(default)]
    pub address: String,
    /// Bech32 address. Informational only.
    #[serde(default)]
    pub bech32: String,
    pub crypto: CryptoSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoSection {
    pub ciphertext: String,
    pub cipherparams: CipherParams,
    pub cipher: String,
    pub kdf: String,
    pub kdfparams: KdfParams,
    pub mac: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherParams {
    pub iv: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    pub dklen: usize,
    pub salt: String,
    pub n: u64,
    pub r: u32,
    pub p: u32,
}

/// Decoded and validated inputs for decryption.
struct Checked {
    ciphertext: Vec<u8>,
    iv: [u8; KEYSTORE_IV_LENGTH],
    salt: Vec<u8>,
    mac: Vec<u8>,
    dklen: usize,
    params: scrypt::Params,
}

fn decode_hex(field: &str, value: &str) -> Result<Vec<u8>, KeystoreError> {
    hex::decode(value).map_err(|e| KeystoreError::Malformed(format!("{field}: {e}")))
}

impl Keystore {
    /// Parse keystore JSON. Fails with `Malformed` on any missing or
    /// ill-typed field.
    pub fn from_json(json: &str) -> Result<Self, KeystoreError> {
        serde_json::from_str(json).map_err(|e| KeystoreError::Malformed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, KeystoreError> {
        serde_json::to_string_pretty(self).map_err(|e| KeystoreError::Serialization(e.to_string()))
    }

    /// Structural checks. Runs before any expensive work.
    fn check(&self) -> Result<Checked, KeystoreError> {
        if self.version != KEYSTORE_VERSION {
            return Err(KeystoreError::Malformed(format!(
                "unsupported version {}",
                self.version
            )));
        }
        let crypto = &self.crypto;
        if crypto.cipher != KEYSTORE_CIPHER {
            return Err(KeystoreError::Malformed(format!(
                "unsupported cipher '{}'",
                crypto.cipher
            )));
        }
        if crypto.kdf != KEYSTORE_KDF {
            return Err(KeystoreError::Malformed(format!(
                "unsupported kdf '{}'",
                crypto.kdf
            )));
        }

        let ciphertext = decode_hex("ciphertext", &crypto.ciphertext)?;
        if ciphertext.len() != PRIVATE_KEY_LENGTH && ciphertext.len() != EXTENDED_SECRET_LENGTH {
            return Err(KeystoreError::Malformed(format!(
                "ciphertext must be {} or {} bytes, got {}",
                PRIVATE_KEY_LENGTH,
                EXTENDED_SECRET_LENGTH,
                ciphertext.len()
            )));
        }

        let iv: [u8; KEYSTORE_IV_LENGTH] = decode_hex("iv", &crypto.cipherparams.iv)?
            .as_slice()
            .try_into()
            .map_err(|_| {
                KeystoreError::Malformed(format!("iv must be {KEYSTORE_IV_LENGTH} bytes"))
            })?;

        let mac = decode_hex("mac", &crypto.mac)?;
        if mac.len() != 32 {
            return Err(KeystoreError::Malformed("mac must be 32 bytes".into()));
        }

        let kdf = &crypto.kdfparams;
        let salt = decode_hex("salt", &kdf.salt)?;
        if salt.is_empty() {
            return Err(KeystoreError::Malformed("empty salt".into()));
        }
        if kdf.dklen < KEYSTORE_DKLEN || kdf.dklen > MAX_DKLEN {
            return Err(KeystoreError::Malformed(format!(
                "dklen must be between {KEYSTORE_DKLEN} and {MAX_DKLEN}"
            )));
        }
        if kdf.n < 2 || !kdf.n.is_power_of_two() {
            return Err(KeystoreError::Malformed(
                "scrypt n must be a power of two".into(),
            ));
        }
        let log_n = kdf.n.trailing_zeros();
        if log_n > MAX_SCRYPT_LOG_N {
            return Err(KeystoreError::Malformed(format!(
                "scrypt n = 2^{log_n} exceeds the supported maximum 2^{MAX_SCRYPT_LOG_N}"
            )));
        }
        let memory = 128u64
            .checked_mul(kdf.n)
            .and_then(|m| m.checked_mul(u64::from(kdf.r)))
            .filter(|m| *m <= MAX_SCRYPT_MEMORY);
        if memory.is_none() {
            return Err(KeystoreError::Malformed(format!(
                "scrypt n = {} with r = {} needs more than {MAX_SCRYPT_MEMORY} bytes",
                kdf.n, kdf.r
            )));
        }
        if kdf.p > MAX_SCRYPT_P {
            return Err(KeystoreError::Malformed(format!(
                "scrypt p = {} exceeds the supported maximum {MAX_SCRYPT_P}",
                kdf.p
            )));
        }
        let params = scrypt::Params::new(log_n as u8, kdf.r, kdf.p, kdf.dklen)
            .map_err(|e| KeystoreError::Malformed(format!("scrypt params: {e}")))?;

        Ok(Checked {
            ciphertext,
            iv,
            salt,
            mac,
            dklen: kdf.dklen,
            params,
        })
    }

    /// Decrypt with `password` and return the key it holds.
    pub fn decrypt(&self, password: &str) -> Result<KeyMaterial, KeystoreError> {
        let checked = self.check()?;

        let mut derived = Zeroizing::new(vec![0u8; checked.dklen]);
        scrypt::scrypt(
            password.as_bytes(),
            &checked.salt,
            &checked.params,
            &mut derived,
        )
        .map_err(|e| KeystoreError::Kdf(e.to_string()))?;

        let mut mac = HmacSha256::new_from_slice(&derived[KEYSTORE_AES_KEY_LENGTH..KEYSTORE_DKLEN])
            .map_err(|e| KeystoreError::Kdf(e.to_string()))?;
        mac.update(&checked.ciphertext);
        mac.verify_slice(&checked.mac)
            .map_err(|_| KeystoreError::InvalidPassword)?;

        let mut plaintext = Zeroizing::new(checked.ciphertext);
        let mut cipher = Aes128Ctr::new_from_slices(&derived[..KEYSTORE_AES_KEY_LENGTH], &checked.iv)
            .map_err(|e| KeystoreError::Kdf(e.to_string()))?;
        cipher.apply_keystream(&mut plaintext);

        let km = KeyMaterial::from_slice(&plaintext[..PRIVATE_KEY_LENGTH])
            .map_err(|e| KeystoreError::Malformed(e.to_string()))?;
        debug!(address = %km.address(), keystore_id = %self.id, "decrypted keystore");
        Ok(km)
    }

    /// Encrypt `key` under `password` with fresh salt, IV and id.
    pub fn encrypt(key: &KeyMaterial, password: &str) -> Result<Self, KeystoreError> {
        let mut salt = [0u8; KEYSTORE_SALT_LENGTH];
        let mut iv = [0u8; KEYSTORE_IV_LENGTH];
        OsRng.fill_bytes(&mut salt);
        OsRng.fill_bytes(&mut iv);

        let log_n = KEYSTORE_SCRYPT_N.trailing_zeros() as u8;
        let params =
            scrypt::Params::new(log_n, KEYSTORE_SCRYPT_R, KEYSTORE_SCRYPT_P, KEYSTORE_DKLEN)
                .map_err(|e| KeystoreError::Kdf(e.to_string()))?;
        let mut derived = Zeroizing::new([0u8; KEYSTORE_DKLEN]);
        scrypt::scrypt(password.as_bytes(), &salt, &params, &mut derived[..])
            .map_err(|e| KeystoreError::Kdf(e.to_string()))?;

        let mut ciphertext = key.extended_bytes().to_vec();
        let mut cipher = Aes128Ctr::new_from_slices(&derived[..KEYSTORE_AES_KEY_LENGTH], &iv)
            .map_err(|e| KeystoreError::Kdf(e.to_string()))?;
        cipher.apply_keystream(&mut ciphertext);

        let mut mac = HmacSha256::new_from_slice(&derived[KEYSTORE_AES_KEY_LENGTH..])
            .map_err(|e| KeystoreError::Kdf(e.to_string()))?;
        mac.update(&ciphertext);
        let mac = mac.finalize().into_bytes();

        debug!(address = %key.address(), "encrypted keystore");
        Ok(Self {
            version: KEYSTORE_VERSION,
            id: Uuid::new_v4().to_string(),
            address: key.address().to_hex(),
            bech32: key.address().to_bech32(),
            crypto: CryptoSection {
                ciphertext: hex::encode(ciphertext),
                cipherparams: CipherParams {
                    iv: hex::encode(iv),
                },
                cipher: KEYSTORE_CIPHER.to_string(),
                kdf: KEYSTORE_KDF.to_string(),
                kdfparams: KdfParams {
                    dklen: KEYSTORE_DKLEN,
                    salt: hex::encode(salt),
                    n: u64::from(KEYSTORE_SCRYPT_N),
                    r: KEYSTORE_SCRYPT_R,
                    p: KEYSTORE_SCRYPT_P,
                },
                mac: hex::encode(mac),
            },
        })
    }
}

impl KeyMaterial {
    /// Import a key from keystore JSON and its password.
    pub fn from_keystore_json(json: &str, password: &str) -> Result<Self, KeystoreError> {
        Keystore::from_json(json)?.decrypt(password)
    }

    /// Export this key as keystore JSON protected by `password`.
    pub fn to_keystore_json(&self, password: &str) -> Result<String, KeystoreError> {
        Keystore::encrypt(self, password)?.to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE_ADDRESS: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";

    const ALICE_KEYSTORE: &str = r#"{
        "version": 4,
        "id": "0dc10c02-b59b-4bac-9710-6b2cfa4284ba",
        "address": "0139472eff6886771a982f3083da5d421f24c29181e63888228dc81ca60d69e1",
        "bech32": "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th",
        "crypto": {
            "ciphertext": "da49ecb5a3c4b1e46e2ce99b5af1ed77d4834b591805fe8d2e1e74a1092bb94ee79e01748c406afd7e70d16209b9ffb722ac596bb9321f8bf3b9e5889520aa95",
            "cipherparams": { "iv": "2da5620906634972d9a623bc249d63d4" },
            "cipher": "aes-128-ctr",
            "kdf": "scrypt",
            "kdfparams": {
                "dklen": 32,
                "salt": "4903bd0e7880baa04fc4f886518ac5c672cdc745a6bd13dcec2b6c12e9bffe8d",
                "n": 4096,
                "r": 8,
                "p": 1
            },
            "mac": "4ede751aa40d1c6bac343cb4d7befcf01f7e60768cbaaecb86efd09bbfda4e2f"
        }
    }"#;

    fn alice_with(edit: impl FnOnce(&mut serde_json::Value)) -> String {
        let mut v: serde_json::Value = serde_json::from_str(ALICE_KEYSTORE).unwrap();
        edit(&mut v);
        v.to_string()
    }

    #[test]
    fn decrypts_known_keystore() {
        let km = KeyMaterial::from_keystore_json(ALICE_KEYSTORE, "password").unwrap();
        assert_eq!(km.address().to_bech32(), ALICE_ADDRESS);
        assert_eq!(
            hex::encode(km.private_key_bytes()),
            "413f42575f7f26fad3317a778771212fdb80245850981e48b58a4f25e344e8f9"
        );
    }

    #[test]
    fn wrong_password_is_authentication_error() {
        let err = KeyMaterial::from_keystore_json(ALICE_KEYSTORE, "passw0rd").unwrap_err();
        assert!(matches!(err, KeystoreError::InvalidPassword));
        assert_eq!(err.kind(), ErrorKind::Authentication);
    }

    #[test]
    fn tampered_ciphertext_looks_like_wrong_password() {
        let json = alice_with(|v| {
            let ct = v["crypto"]["ciphertext"].as_str().unwrap().to_string();
            let flipped = format!("00{}", &ct[2..]);
            v["crypto"]["ciphertext"] = flipped.into();
        });
        let err = KeyMaterial::from_keystore_json(&json, "password").unwrap_err();
        assert!(matches!(err, KeystoreError::InvalidPassword));
        assert_eq!(
            err.to_string(),
            KeystoreError::InvalidPassword.to_string()
        );
    }

    #[test]
    fn missing_field_is_malformed() {
        let json = alice_with(|v| {
            v["crypto"].as_object_mut().unwrap().remove("mac");
        });
        let err = KeyMaterial::from_keystore_json(&json, "password").unwrap_err();
        assert!(matches!(err, KeystoreError::Malformed(_)));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn ill_typed_field_is_malformed() {
        let json = alice_with(|v| v["crypto"]["kdfparams"]["n"] = "4096".into());
        assert!(matches!(
            KeyMaterial::from_keystore_json(&json, "password"),
            Err(KeystoreError::Malformed(_))
        ));
    }

    #[test]
    fn unsupported_cipher_and_kdf_are_malformed() {
        let json = alice_with(|v| v["crypto"]["cipher"] = "aes-256-gcm".into());
        assert!(matches!(
            KeyMaterial::from_keystore_json(&json, "password"),
            Err(KeystoreError::Malformed(_))
        ));

        let json = alice_with(|v| v["crypto"]["kdf"] = "pbkdf2".into());
        assert!(matches!(
            KeyMaterial::from_keystore_json(&json, "password"),
            Err(KeystoreError::Malformed(_))
        ));
    }

    #[test]
    fn bad_kdf_params_are_rejected_before_derivation() {
        for n in [0u64, 1, 3000, 1 << 40] {
            let json = alice_with(|v| v["crypto"]["kdfparams"]["n"] = n.into());
            assert!(
                matches!(
                    KeyMaterial::from_keystore_json(&json, "password"),
                    Err(KeystoreError::Malformed(_))
                ),
                "n = {n} should be rejected"
            );
        }

        for dklen in [16u64, 1 << 40] {
            let json = alice_with(|v| v["crypto"]["kdfparams"]["dklen"] = dklen.into());
            assert!(
                matches!(
                    KeyMaterial::from_keystore_json(&json, "password"),
                    Err(KeystoreError::Malformed(_))
                ),
                "dklen = {dklen} should be rejected"
            );
        }

        // Small n does not excuse a huge r: 128 * 2 * 2^28 bytes is 64 GiB.
        let json = alice_with(|v| {
            v["crypto"]["kdfparams"]["n"] = 2.into();
            v["crypto"]["kdfparams"]["r"] = (1u64 << 28).into();
        });
        assert!(matches!(
            KeyMaterial::from_keystore_json(&json, "password"),
            Err(KeystoreError::Malformed(_))
        ));

        let json = alice_with(|v| v["crypto"]["kdfparams"]["r"] = 4096.into());
        assert!(matches!(
            KeyMaterial::from_keystore_json(&json, "password"),
            Err(KeystoreError::Malformed(_))
        ));

        let json = alice_with(|v| v["crypto"]["kdfparams"]["p"] = 1_000_000.into());
        assert!(matches!(
            KeyMaterial::from_keystore_json(&json, "password"),
            Err(KeystoreError::Malformed(_))
        ));
    }

    #[test]
    fn bad_hex_is_malformed() {
        let json = alice_with(|v| v["crypto"]["cipherparams"]["iv"] = "zz".into());
        assert!(matches!(
            KeyMaterial::from_keystore_json(&json, "password"),
            Err(KeystoreError::Malformed(_))
        ));
    }

    #[test]
    fn not_json_is_malformed() {
        assert!(matches!(
            KeyMaterial::from_keystore_json("{ nope", "password"),
            Err(KeystoreError::Malformed(_))
        ));
    }

    #[test]
    fn encrypt_decrypt_roundtrip() {
        let km = KeyMaterial::generate();
        let json = km.to_keystore_json("correct horse").unwrap();
        let restored = KeyMaterial::from_keystore_json(&json, "correct horse").unwrap();
        assert_eq!(restored.private_key_bytes(), km.private_key_bytes());
        assert!(matches!(
            KeyMaterial::from_keystore_json(&json, "battery staple"),
            Err(KeystoreError::InvalidPassword)
        ));
    }

    #[test]
    fn written_keystore_uses_expected_parameters() {
        let km = KeyMaterial::generate();
        let ks = Keystore::encrypt(&km, "pw").unwrap();
        assert_eq!(ks.version, 4);
        assert_eq!(ks.bech32, km.address().to_bech32());
        assert_eq!(ks.address, km.address().to_hex());
        assert_eq!(ks.crypto.cipher, "aes-128-ctr");
        assert_eq!(ks.crypto.kdf, "scrypt");
        assert_eq!(ks.crypto.kdfparams.n, 4096);
        assert_eq!(ks.crypto.kdfparams.salt.len(), 64);
        assert_eq!(ks.crypto.cipherparams.iv.len(), 32);
        assert_eq!(ks.crypto.ciphertext.len(), 128);
        assert!(Uuid::parse_str(&ks.id).is_ok());
    }

    #[test]
    fn two_exports_differ_in_salt_iv_and_id() {
        let km = KeyMaterial::generate();
        let a = Keystore::encrypt(&km, "pw").unwrap();
        let b = Keystore::encrypt(&km, "pw").unwrap();
        assert_ne!(a.id, b.id);
        assert_ne!(a.crypto.kdfparams.salt, b.crypto.kdfparams.salt);
        assert_ne!(a.crypto.cipherparams.iv, b.crypto.cipherparams.iv);
    }
}

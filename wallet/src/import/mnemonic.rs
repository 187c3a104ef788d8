//! # Mnemonic Import
//!
//! BIP-39 phrase + account index → [`KeyMaterial`].
//!
//! ## Derivation
//!
//! ```text
//! phrase ──PBKDF2 (BIP-39, empty passphrase)──▶ 64-byte seed
//! seed   ──SLIP-0010 Ed25519──▶ m/44'/508'/0'/0'/{index}' ──▶ 32-byte secret
//! ```
//!
//! SLIP-0010 for Ed25519 only defines hardened children, so every path
//! component gets the hardened bit. There is no public derivation here and
//! no extended public keys. Every index is a fully independent secret.
//!
//! The same phrase and index always produce the same account. That is the
//! whole point of a mnemonic backup, and the fixtures in `tests/` pin it.

use bip39::{Language, Mnemonic as Bip39Mnemonic};
use hmac::{Hmac, Mac};
use rand::RngCore;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha512;
use std::fmt;
use thiserror::Error;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::config::{
    derivation_path, DEFAULT_MNEMONIC_WORDS, HARDENED_OFFSET, PRIVATE_KEY_LENGTH,
    SLIP10_ED25519_SEED_KEY,
};
use crate::crypto::KeyMaterial;

type HmacSha512 = Hmac<Sha512>;

/// Errors that can occur while importing a mnemonic.
#[derive(Debug, Error)]
pub enum MnemonicError {
    /// Unknown word, bad checksum or unsupported word count.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// Unsupported word count requested for generation.
    #[error("invalid word count: {0} (must be 12, 15, 18, 21 or 24)")]
    InvalidWordCount(usize),

    /// HMAC key setup failed. Unreachable with the fixed SLIP-0010 key.
    #[error("key derivation failed: {0}")]
    Derivation(String),
}

impl From<bip39::Error> for MnemonicError {
    fn from(err: bip39::Error) -> Self {
        MnemonicError::InvalidMnemonic(err.to_string())
    }
}

/// A validated BIP-39 phrase.
///
/// The phrase is held as a [`SecretString`] so it doesn't end up in logs by
/// accident; `Debug` shows the word count only.
pub struct Mnemonic {
    inner: Bip39Mnemonic,
    phrase: SecretString,
}

impl Mnemonic {
    /// Generate a fresh 24-word phrase from OS randomness.
    pub fn generate() -> Result<Self, MnemonicError> {
        Self::generate_with_word_count(DEFAULT_MNEMONIC_WORDS)
    }

    /// Generate a phrase with the given number of words.
    pub fn generate_with_word_count(word_count: usize) -> Result<Self, MnemonicError> {
        let entropy_len = match word_count {
            12 => 16,
            15 => 20,
            18 => 24,
            21 => 28,
            24 => 32,
            other => return Err(MnemonicError::InvalidWordCount(other)),
        };

        let mut entropy = Zeroizing::new([0u8; 32]);
        rand::thread_rng().fill_bytes(&mut entropy[..entropy_len]);
        let inner = Bip39Mnemonic::from_entropy_in(Language::English, &entropy[..entropy_len])?;
        let phrase = SecretString::from(inner.to_string());
        Ok(Self { inner, phrase })
    }

    /// Parse and validate a phrase against the English wordlist.
    ///
    /// Leading/trailing whitespace and repeated separators are tolerated, as
    /// is upper case. Anything else (unknown word, bad checksum, wrong word
    /// count) is [`MnemonicError::InvalidMnemonic`].
    pub fn from_phrase(phrase: &str) -> Result<Self, MnemonicError> {
        let mut normalized = phrase
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let parsed = Bip39Mnemonic::parse_in_normalized(Language::English, &normalized);
        let inner = match parsed {
            Ok(m) => m,
            Err(e) => {
                normalized.zeroize();
                return Err(e.into());
            }
        };
        Ok(Self {
            inner,
            phrase: SecretString::from(normalized),
        })
    }

    /// The normalized phrase. Use immediately, don't store.
    pub fn phrase(&self) -> &str {
        self.phrase.expose_secret()
    }

    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    /// The 64-byte BIP-39 seed (empty passphrase).
    fn seed(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.inner.to_seed_normalized(""))
    }

    /// Derive the account key at `m/44'/508'/0'/0'/{account_index}'`.
    pub fn derive(&self, account_index: u32) -> Result<KeyMaterial, MnemonicError> {
        let seed = self.seed();
        let secret = slip10_derive(seed.as_ref(), &derivation_path(account_index))?;
        let km = KeyMaterial::from_private_key(&secret);
        debug!(account_index, address = %km.address(), "derived key from mnemonic");
        Ok(km)
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

/// SLIP-0010 Ed25519 derivation along a path of (unhardened) indices.
/// The hardened bit is added here.
fn slip10_derive(
    seed: &[u8],
    path: &[u32],
) -> Result<Zeroizing<[u8; PRIVATE_KEY_LENGTH]>, MnemonicError> {
    let mut mac = HmacSha512::new_from_slice(SLIP10_ED25519_SEED_KEY)
        .map_err(|e| MnemonicError::Derivation(e.to_string()))?;
    mac.update(seed);
    let mut node = Zeroizing::new([0u8; 64]);
    node.copy_from_slice(&mac.finalize().into_bytes());

    for index in path {
        let (key, chain_code) = node.split_at(PRIVATE_KEY_LENGTH);
        let mut mac = HmacSha512::new_from_slice(chain_code)
            .map_err(|e| MnemonicError::Derivation(e.to_string()))?;
        mac.update(&[0u8]);
        mac.update(key);
        mac.update(&(index | HARDENED_OFFSET).to_be_bytes());
        node.copy_from_slice(&mac.finalize().into_bytes());
    }

    let mut secret = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
    secret.copy_from_slice(&node[..PRIVATE_KEY_LENGTH]);
    Ok(secret)
}

impl KeyMaterial {
    /// Import the account at `account_index` from a BIP-39 phrase.
    pub fn from_mnemonic(phrase: &str, account_index: u32) -> Result<Self, MnemonicError> {
        Mnemonic::from_phrase(phrase)?.derive(account_index)
    }
}

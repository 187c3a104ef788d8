//! # Cryptographic Primitives
//!
//! Thin, typed wrappers over audited crates:
//!
//! - **Ed25519** (`ed25519-dalek`) for account keys and transaction signatures.
//! - **SHA-256** (`sha2`) for the integrity tag on serialized secrets.
//! - **Keccak-256** (`sha3`) for DNS name sharding.
//!
//! The keystore cipher suite (scrypt, AES-128-CTR, HMAC-SHA256) lives with
//! the keystore importer since nothing else uses it.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{keccak256, sha256, sha256_array};
pub use keys::{KeyError, KeyMaterial, Signature};
pub use signatures::{sign, verify, verify_strict, SignatureError};

//! # Hashing Utilities
//!
//! Two hash functions, each with exactly one job:
//!
//! - **SHA-256** computes the integrity tag on serialized secrets. Only the
//!   first four bytes are kept; see [`crate::secret`].
//!
//! - **Keccak-256** maps herotag names to DNS shards. This is the original
//!   Keccak padding (as in Ethereum), *not* NIST SHA3-256. The two produce
//!   different digests for the same input, and only Keccak matches what the
//!   network computes on-chain.
//!
//! HMAC-SHA512 (SLIP-0010) and HMAC-SHA256 (keystore MAC) are used directly
//! by the importers through the `hmac` crate and don't get wrappers here.

use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use elrond_wallet::crypto::sha256;
///
/// let hash = sha256(b"erd");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Vec<u8> {
    sha256_array(data).to_vec()
}

/// Compute the SHA-256 hash and return a fixed-size array.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the legacy Keccak-256 hash of the input data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

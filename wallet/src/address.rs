//! # Account Addresses
//!
//! An address is the 32-byte Ed25519 public key of an account, shown to
//! humans as a bech32 string with the `erd` prefix:
//!
//! ```text
//! public_key (32 bytes)
//!     -> Bech32("erd", public_key) -> erd1tcylw3y4s2y43xps0cjuvgql...
//! ```
//!
//! Unlike schemes that hash the key first, the address *is* the key. That
//! means anyone holding an address can verify signatures made by it, which
//! [`crate::transaction::SignedTransaction::verify`] relies on.
//!
//! Bech32 gives us a checksum for free: a single mistyped character is
//! always caught, which matters when users paste addresses into forms.

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{ADDRESS_HRP, PUBLIC_KEY_LENGTH};

const HRP: Hrp = Hrp::parse_unchecked(ADDRESS_HRP);

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while parsing an address.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The string is not valid bech32 (bad charset, bad checksum, mixed case).
    #[error("bech32 decode error: {0}")]
    Bech32Decode(String),

    /// The decoded address has an unexpected human-readable prefix.
    #[error("invalid HRP: expected '{expected}', got '{got}'")]
    InvalidHrp {
        /// The expected HRP.
        expected: String,
        /// The HRP that was actually found.
        got: String,
    },

    /// The decoded payload is not a 32-byte public key.
    #[error("invalid address data length: expected {expected} bytes, got {got}")]
    InvalidDataLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes.
        got: usize,
    },
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// An account address.
///
/// # Examples
///
/// ```
/// use elrond_wallet::address::Address;
///
/// let addr: Address = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th"
///     .parse()
///     .unwrap();
/// assert_eq!(
///     addr.to_bech32(),
///     "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th"
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    bytes: [u8; PUBLIC_KEY_LENGTH],
}

impl Address {
    /// Wraps raw public key bytes.
    pub fn from_public_key(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Parses a bech32 `erd1...` string.
    ///
    /// Validates the checksum, the prefix and the payload length. Only the
    /// original bech32 checksum is accepted; bech32m strings are rejected.
    pub fn from_bech32(addr: &str) -> Result<Self, AddressError> {
        let checked = CheckedHrpstring::new::<Bech32>(addr)
            .map_err(|e| AddressError::Bech32Decode(e.to_string()))?;
        let hrp = checked.hrp();
        let data: Vec<u8> = checked.byte_iter().collect();

        if hrp != HRP {
            return Err(AddressError::InvalidHrp {
                expected: ADDRESS_HRP.to_string(),
                got: hrp.to_string(),
            });
        }

        let bytes: [u8; PUBLIC_KEY_LENGTH] =
            data.as_slice()
                .try_into()
                .map_err(|_| AddressError::InvalidDataLength {
                    expected: PUBLIC_KEY_LENGTH,
                    got: data.len(),
                })?;

        Ok(Self { bytes })
    }

    /// Encodes this address as a bech32 string.
    pub fn to_bech32(&self) -> String {
        self.to_string()
    }

    /// The public key bytes behind this address.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    /// Hex form of the public key, as stored in keystore files.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A 32-byte payload is far below bech32's length limit, so the only
        // way this fails is the formatter itself failing.
        bech32::encode_to_fmt::<Bech32, _>(f, HRP, &self.bytes).map_err(|_| fmt::Error)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_bech32(&s)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.to_bech32()
    }
}

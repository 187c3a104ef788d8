//! # Protocol Configuration & Constants
//!
//! Every magic number the wallet depends on lives here. If you're hardcoding
//! a constant somewhere else, you're doing it wrong and you owe the team coffee.
//!
//! Most of these values are not ours to choose. The HRP, the coin type, the
//! keystore layout and the PEM framing are all defined by the Elrond network
//! and by the tools people already use to create wallet files. Changing any
//! of them means the wallets we import stop matching the wallets users have.

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

/// Bech32 human-readable prefix for account addresses (`erd1...`).
pub const ADDRESS_HRP: &str = "erd";

/// Length of the bech32 string for a 32-byte account address.
/// `erd` + `1` + 52 data chars + 6 checksum chars.
pub const ADDRESS_STRING_LENGTH: usize = 62;

// ---------------------------------------------------------------------------
// Key Material
// ---------------------------------------------------------------------------

/// Ed25519 secret seed length in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Ed25519 verifying key length in bytes. Account addresses are these
/// 32 bytes, bech32-encoded. No hashing in between.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 signature length. Always 64 bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Length of the "full" secret key written by Elrond tools: the 32-byte seed
/// followed by the 32-byte public key.
pub const EXTENDED_SECRET_LENGTH: usize = PRIVATE_KEY_LENGTH + PUBLIC_KEY_LENGTH;

// ---------------------------------------------------------------------------
// HD Derivation
// ---------------------------------------------------------------------------

/// BIP-44 purpose.
pub const BIP44_PURPOSE: u32 = 44;

/// SLIP-0044 coin type registered for Elrond.
pub const ELROND_COIN_TYPE: u32 = 508;

/// SLIP-0010 master key HMAC key for the Ed25519 curve.
pub const SLIP10_ED25519_SEED_KEY: &[u8] = b"ed25519 seed";

/// Hardened index offset. SLIP-0010 Ed25519 only supports hardened children.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Number of words in freshly generated mnemonics.
pub const DEFAULT_MNEMONIC_WORDS: usize = 24;

/// Returns the derivation path for the given account index:
/// `m/44'/508'/0'/0'/{index}'`.
pub fn derivation_path(account_index: u32) -> [u32; 5] {
    [BIP44_PURPOSE, ELROND_COIN_TYPE, 0, 0, account_index]
}

// ---------------------------------------------------------------------------
// Keystore
// ---------------------------------------------------------------------------

/// Keystore schema version written by Elrond wallets.
pub const KEYSTORE_VERSION: u32 = 4;

/// The only cipher Elrond keystores use.
pub const KEYSTORE_CIPHER: &str = "aes-128-ctr";

/// The only KDF Elrond keystores use.
pub const KEYSTORE_KDF: &str = "scrypt";

/// scrypt cost parameter used when we write keystores. Matches what the
/// official web wallet produces, so files we export open everywhere.
pub const KEYSTORE_SCRYPT_N: u32 = 4096;

/// scrypt block size parameter.
pub const KEYSTORE_SCRYPT_R: u32 = 8;

/// scrypt parallelization parameter.
pub const KEYSTORE_SCRYPT_P: u32 = 1;

/// Derived key length. First half encrypts, second half keys the MAC.
pub const KEYSTORE_DKLEN: usize = 32;

/// Salt length for newly written keystores.
pub const KEYSTORE_SALT_LENGTH: usize = 32;

/// AES-128-CTR IV length.
pub const KEYSTORE_IV_LENGTH: usize = 16;

/// AES-128 key length.
pub const KEYSTORE_AES_KEY_LENGTH: usize = 16;

// ---------------------------------------------------------------------------
// PEM
// ---------------------------------------------------------------------------

/// Label used in the marker lines of PEM files we write.
pub const PEM_LABEL: &str = "PRIVATE KEY for";

/// Base64 line width in PEM bodies.
pub const PEM_LINE_WIDTH: usize = 64;

// ---------------------------------------------------------------------------
// Serialized Secrets
// ---------------------------------------------------------------------------

/// Hex characters holding the private key in a serialized secret.
pub const SECRET_PAYLOAD_CHARS: usize = PRIVATE_KEY_LENGTH * 2;

/// Bytes of SHA-256 kept as the integrity tag. Short on purpose: it catches
/// copy/paste damage, it is not a MAC.
pub const SECRET_TAG_BYTES: usize = 4;

/// Hex characters holding the tag.
pub const SECRET_TAG_CHARS: usize = SECRET_TAG_BYTES * 2;

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// Transaction version used when the network doesn't say otherwise.
pub const DEFAULT_TRANSACTION_VERSION: u32 = 1;

/// Chain id of a local testnet, the default for offline tooling.
pub const LOCAL_TESTNET_CHAIN_ID: &str = "local-testnet";

/// Minimum gas price on the public networks (in the smallest unit).
pub const DEFAULT_MIN_GAS_PRICE: u64 = 1_000_000_000;

/// Gas limit of a plain value transfer with no data.
pub const DEFAULT_MIN_GAS_LIMIT: u64 = 50_000;

/// Extra gas charged per byte of `data`.
pub const DEFAULT_GAS_PER_DATA_BYTE: u64 = 1_500;

/// Decimals of the native token. 1 EGLD = 10^18 of the smallest unit.
pub const NATIVE_TOKEN_DECIMALS: usize = 18;

// ---------------------------------------------------------------------------
// DNS
// ---------------------------------------------------------------------------

/// Number of DNS contracts, one per name shard.
pub const DNS_SHARD_COUNT: usize = 256;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_path_is_parameterized_by_index_only() {
        assert_eq!(derivation_path(0), [44, 508, 0, 0, 0]);
        assert_eq!(derivation_path(7), [44, 508, 0, 0, 7]);
    }

    #[test]
    fn extended_secret_is_seed_plus_public_key() {
        assert_eq!(EXTENDED_SECRET_LENGTH, 64);
    }

    #[test]
    fn derived_key_splits_into_cipher_and_mac_halves() {
        assert_eq!(KEYSTORE_DKLEN, KEYSTORE_AES_KEY_LENGTH * 2);
    }
}

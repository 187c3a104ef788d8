//! # Error Taxonomy
//!
//! Each module owns its own `thiserror` enum. This module ties them together
//! under [`WalletError`] for callers that don't care which importer failed,
//! and classifies every failure into one of a handful of [`ErrorKind`]s.
//!
//! The kinds matter more than the variants. A UI wants to know "ask for the
//! password again" (`Authentication`) versus "this file is garbage"
//! (`Validation`) versus "the backup string got mangled" (`Integrity`).

use thiserror::Error;

use crate::address::AddressError;
use crate::dns::DnsError;
use crate::import::keystore::KeystoreError;
use crate::import::mnemonic::MnemonicError;
use crate::import::pem::PemError;
use crate::provider::ProviderError;
use crate::secret::SecretError;
use crate::transaction::SigningError;

/// Coarse classification of every error this crate can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input (mnemonic, keystore, PEM, address, transaction draft).
    /// Detected before any cryptographic work is done.
    Validation,
    /// Wrong keystore password. Indistinguishable from a corrupted keystore.
    Authentication,
    /// A serialized secret failed its integrity tag.
    Integrity,
    /// The signing key does not belong to the transaction's sender.
    AuthorizationMismatch,
    /// The network provider failed. Passed through unchanged.
    Provider,
}

/// Any error produced by the wallet core.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Mnemonic(#[from] MnemonicError),

    #[error(transparent)]
    Keystore(#[from] KeystoreError),

    #[error(transparent)]
    Pem(#[from] PemError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Dns(#[from] DnsError),
}

impl WalletError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::Address(_) => ErrorKind::Validation,
            WalletError::Mnemonic(_) => ErrorKind::Validation,
            WalletError::Keystore(e) => e.kind(),
            WalletError::Pem(_) => ErrorKind::Validation,
            WalletError::Secret(_) => ErrorKind::Integrity,
            WalletError::Signing(e) => e.kind(),
            WalletError::Provider(_) => ErrorKind::Provider,
            WalletError::Dns(_) => ErrorKind::Validation,
        }
    }
}

/// Convenience alias used by the [`crate::wallet::Wallet`] facade.
pub type WalletResult<T> = Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_taxonomy() {
        let err: WalletError = SecretError::Corrupted.into();
        assert_eq!(err.kind(), ErrorKind::Integrity);

        let err: WalletError = KeystoreError::InvalidPassword.into();
        assert_eq!(err.kind(), ErrorKind::Authentication);

        let err: WalletError = KeystoreError::Malformed("missing mac".into()).into();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err: WalletError = PemError::MissingMarkers.into();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err: WalletError = ProviderError::Unavailable("down".into()).into();
        assert_eq!(err.kind(), ErrorKind::Provider);
    }

    #[test]
    fn signing_errors_keep_their_own_kind() {
        let err: WalletError = SigningError::SenderMismatch {
            sender: "erd1a".into(),
            key_address: "erd1b".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::AuthorizationMismatch);

        let err: WalletError =
            SigningError::Provider(ProviderError::Unavailable("timeout".into())).into();
        assert_eq!(err.kind(), ErrorKind::Provider);
    }
}

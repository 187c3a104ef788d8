//! Transaction signing.
//!
//! Turning a draft into a [`SignedTransaction`] takes five steps, in this
//! order:
//!
//! 1. **Authorize.** The draft's sender must be the key's own address.
//!    Checked first, so a mismatched key never costs a network round trip.
//! 2. **Validate.** Receiver must be an address, value an integer string.
//! 3. **Fill defaults.** A missing nonce is fetched from the provider (one
//!    call, errors passed through as-is). Missing gas comes from the network
//!    config, subject to [`GasDefaults`].
//! 4. **Canonicalize and sign.** See [`super::canonical`].
//! 5. **Assemble.** Chain id and version come from the network config.
//!
//! The signer holds no mutable state. Two concurrent signings for the same
//! sender may well read the same nonce; sequencing submissions is the
//! caller's job.

use thiserror::Error;
use tracing::debug;

use super::builder::UnsignedTransaction;
use super::gas::min_gas_limit;
use super::signed::SignedTransaction;
use super::value::normalize_value;
use crate::address::Address;
use crate::crypto::KeyMaterial;
use crate::error::ErrorKind;
use crate::provider::{NetworkConfig, NetworkProvider, ProviderError};

#[derive(Debug, Error)]
pub enum SigningError {
    /// The draft's sender is not the signing key's address.
    #[error("sender {sender} does not match signing key address {key_address}")]
    SenderMismatch { sender: String, key_address: String },

    /// Receiver or value is malformed.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// The provider failed while filling defaults.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl SigningError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SigningError::SenderMismatch { .. } => ErrorKind::AuthorizationMismatch,
            SigningError::InvalidTransaction(_) => ErrorKind::Validation,
            SigningError::Provider(_) => ErrorKind::Provider,
        }
    }
}

/// How to fill gas fields the draft left empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GasDefaults {
    /// `min_gas_price`, and `min_gas_limit + gas_per_data_byte * data.len()`.
    #[default]
    FromNetwork,
    /// Leave them empty. They are then left out of the signed bytes too,
    /// matching transactions signed by older clients.
    Unset,
}

/// Signs drafts, using `provider` for nonce lookups.
pub struct Signer<'a, P: NetworkProvider + ?Sized> {
    provider: &'a P,
    gas_defaults: GasDefaults,
}

impl<'a, P: NetworkProvider + ?Sized> Signer<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            gas_defaults: GasDefaults::default(),
        }
    }

    pub fn with_gas_defaults(mut self, gas_defaults: GasDefaults) -> Self {
        self.gas_defaults = gas_defaults;
        self
    }

    /// Sign `draft` with `key` for the network described by `config`.
    pub async fn sign(
        &self,
        draft: &UnsignedTransaction,
        key: &KeyMaterial,
        config: &NetworkConfig,
    ) -> Result<SignedTransaction, SigningError> {
        let sender = match Address::from_bech32(&draft.sender) {
            Ok(addr) if addr == *key.address() => addr,
            _ => {
                return Err(SigningError::SenderMismatch {
                    sender: draft.sender.clone(),
                    key_address: key.address().to_bech32(),
                })
            }
        };

        let receiver = Address::from_bech32(&draft.receiver)
            .map_err(|e| SigningError::InvalidTransaction(format!("receiver: {e}")))?;
        let value = normalize_value(&draft.value)
            .map_err(|e| SigningError::InvalidTransaction(e.to_string()))?;

        let nonce = match draft.nonce {
            Some(nonce) => nonce,
            None => {
                let nonce = self.provider.get_current_nonce(&sender).await?;
                debug!(%sender, nonce, "fetched nonce");
                nonce
            }
        };

        let data = draft.data_or_empty().to_string();
        let (gas_price, gas_limit) = match self.gas_defaults {
            GasDefaults::FromNetwork => (
                Some(draft.gas_price.unwrap_or(config.min_gas_price)),
                Some(
                    draft
                        .gas_limit
                        .unwrap_or_else(|| min_gas_limit(config, &data)),
                ),
            ),
            GasDefaults::Unset => (draft.gas_price, draft.gas_limit),
        };

        let mut tx = SignedTransaction {
            nonce,
            value,
            receiver: receiver.to_bech32(),
            sender: sender.to_bech32(),
            gas_price,
            gas_limit,
            data,
            chain_id: config.chain_id.clone(),
            version: config.min_transaction_version,
            signature: String::new(),
        };

        let bytes = tx
            .signable_bytes()
            .map_err(|e| SigningError::InvalidTransaction(e.to_string()))?;
        tx.signature = key.sign(&bytes).to_hex();

        debug!(
            %sender,
            nonce,
            chain_id = %tx.chain_id,
            gas_price = ?tx.gas_price,
            gas_limit = ?tx.gas_limit,
            "signed transaction"
        );
        Ok(tx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

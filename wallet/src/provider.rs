//! # Network Provider Interface
//!
//! The signer needs exactly two facts from the network: its configuration
//! (chain id, gas minimums, transaction version) and the sender's current
//! nonce. [`NetworkProvider`] is that seam. A real implementation talks to a
//! proxy over HTTP; this crate ships only [`StaticProvider`], which answers
//! from memory and is what the CLI uses for offline signing.
//!
//! Implementations must be `Send + Sync` so one provider can be shared
//! between tasks behind an `Arc`. Errors are passed through the signer
//! untouched, so a provider is free to put whatever it likes in the message.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::trace;

use crate::address::Address;
use crate::config::{
    DEFAULT_GAS_PER_DATA_BYTE, DEFAULT_MIN_GAS_LIMIT, DEFAULT_MIN_GAS_PRICE,
    DEFAULT_TRANSACTION_VERSION, LOCAL_TESTNET_CHAIN_ID,
};

/// Errors reported by a network provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The network could not be reached.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The network answered with something we couldn't use.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Network parameters relevant to building transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Node software version. Informational.
    pub version: String,
    pub chain_id: String,
    /// Extra gas per byte of transaction data.
    pub gas_per_data_byte: u64,
    /// Gas limit of a transfer without data.
    pub min_gas_limit: u64,
    pub min_gas_price: u64,
    /// Written into the `version` field of signed transactions.
    pub min_transaction_version: u32,
}

impl Default for NetworkConfig {
    /// A local testnet with mainnet gas rules.
    fn default() -> Self {
        Self {
            version: String::new(),
            chain_id: LOCAL_TESTNET_CHAIN_ID.to_string(),
            gas_per_data_byte: DEFAULT_GAS_PER_DATA_BYTE,
            min_gas_limit: DEFAULT_MIN_GAS_LIMIT,
            min_gas_price: DEFAULT_MIN_GAS_PRICE,
            min_transaction_version: DEFAULT_TRANSACTION_VERSION,
        }
    }
}

/// Read access to the network, as far as signing is concerned.
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    async fn get_network_config(&self) -> Result<NetworkConfig, ProviderError>;

    /// The nonce the next transaction from `address` must carry.
    async fn get_current_nonce(&self, address: &Address) -> Result<u64, ProviderError>;
}

#[async_trait]
impl<P: NetworkProvider + ?Sized> NetworkProvider for Arc<P> {
    async fn get_network_config(&self) -> Result<NetworkConfig, ProviderError> {
        (**self).get_network_config().await
    }

    async fn get_current_nonce(&self, address: &Address) -> Result<u64, ProviderError> {
        (**self).get_current_nonce(address).await
    }
}

// ---------------------------------------------------------------------------
// StaticProvider
// ---------------------------------------------------------------------------

/// An in-memory provider with a fixed config and fixed nonces.
///
/// Addresses it has never heard of report nonce 0, like a fresh account.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    config: NetworkConfig,
    nonces: HashMap<Address, u64>,
}

impl StaticProvider {
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            nonces: HashMap::new(),
        }
    }

    /// Builder-style nonce override for one address.
    pub fn with_nonce(mut self, address: Address, nonce: u64) -> Self {
        self.nonces.insert(address, nonce);
        self
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }
}

#[async_trait]
impl NetworkProvider for StaticProvider {
    async fn get_network_config(&self) -> Result<NetworkConfig, ProviderError> {
        Ok(self.config.clone())
    }

    async fn get_current_nonce(&self, address: &Address) -> Result<u64, ProviderError> {
        let nonce = self.nonces.get(address).copied().unwrap_or(0);
        trace!(%address, nonce, "static nonce lookup");
        Ok(nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";

    #[test]
    fn network_config_uses_camel_case() {
        let json = r#"{
            "version": "v1.1.0",
            "chainId": "D",
            "gasPerDataByte": 1500,
            "minGasLimit": 50000,
            "minGasPrice": 1000000000,
            "minTransactionVersion": 1
        }"#;
        let config: NetworkConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.chain_id, "D");
        assert_eq!(config.min_gas_limit, 50_000);

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["gasPerDataByte"], 1500);
        assert_eq!(back["minTransactionVersion"], 1);
    }

    #[test]
    fn default_config_is_local_testnet() {
        let config = NetworkConfig::default();
        assert_eq!(config.chain_id, "local-testnet");
        assert_eq!(config.min_transaction_version, 1);
    }

    #[tokio::test]
    async fn static_provider_answers_from_memory() {
        let alice: Address = ALICE.parse().unwrap();
        let provider = StaticProvider::new(NetworkConfig::default()).with_nonce(alice, 53);

        assert_eq!(provider.get_current_nonce(&alice).await.unwrap(), 53);
        assert_eq!(
            provider.get_network_config().await.unwrap(),
            NetworkConfig::default()
        );

        let stranger = Address::from_public_key([9u8; 32]);
        assert_eq!(provider.get_current_nonce(&stranger).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn arc_and_dyn_providers_work() {
        let provider: Arc<dyn NetworkProvider> = Arc::new(StaticProvider::default());
        let config = provider.get_network_config().await.unwrap();
        assert_eq!(config.chain_id, "local-testnet");
    }
}

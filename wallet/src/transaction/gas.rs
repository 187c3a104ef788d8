//! Gas defaults.
//!
//! A plain transfer costs `min_gas_limit`; every byte of `data` adds
//! `gas_per_data_byte`. The price defaults to the network minimum. These
//! helpers fill missing gas fields on a draft without signing it, for callers
//! that want to show the fee before asking for a password.

use super::builder::UnsignedTransaction;
use crate::provider::{NetworkConfig, NetworkProvider, ProviderError};

/// Smallest gas limit the network accepts for a transaction carrying `data`.
/// Saturates instead of overflowing on absurd inputs.
pub fn min_gas_limit(config: &NetworkConfig, data: &str) -> u64 {
    let data_len = u64::try_from(data.len()).unwrap_or(u64::MAX);
    config
        .min_gas_limit
        .saturating_add(config.gas_per_data_byte.saturating_mul(data_len))
}

/// Returns a copy of `draft` with missing gas price and limit filled in.
/// Fields the caller already set are kept as they are.
pub fn with_default_gas(draft: &UnsignedTransaction, config: &NetworkConfig) -> UnsignedTransaction {
    let mut tx = draft.clone();
    tx.gas_price.get_or_insert(config.min_gas_price);
    if tx.gas_limit.is_none() {
        tx.gas_limit = Some(min_gas_limit(config, draft.data_or_empty()));
    }
    tx
}

/// Like [`with_default_gas`], fetching the config from `provider`.
pub async fn set_default_gas_price_and_limit<P>(
    draft: &UnsignedTransaction,
    provider: &P,
) -> Result<UnsignedTransaction, ProviderError>
where
    P: NetworkProvider + ?Sized,
{
    let config = provider.get_network_config().await?;
    Ok(with_default_gas(draft, &config))
}

//! # Wallet
//!
//! One account's key plus everything you can do with it, behind a single
//! type. This is the entry point most callers want:
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), elrond_wallet::WalletError> {
//! use elrond_wallet::provider::StaticProvider;
//! use elrond_wallet::transaction::TransactionBuilder;
//! use elrond_wallet::Wallet;
//!
//! let wallet = Wallet::from_mnemonic("fringe dry little ...", 0)?;
//! let draft = TransactionBuilder::new()
//!     .sender(&wallet.address().to_bech32())
//!     .receiver("erd1...")
//!     .value("1000000000000000000")
//!     .build();
//! let signed = wallet.sign_transaction(&draft, &StaticProvider::default()).await?;
//! # Ok(()) }
//! ```

use tracing::debug;

use crate::address::Address;
use crate::crypto::KeyMaterial;
use crate::error::WalletResult;
use crate::import::Mnemonic;
use crate::provider::NetworkProvider;
use crate::secret;
use crate::transaction::{GasDefaults, SignedTransaction, Signer, UnsignedTransaction};

/// A single-account wallet.
#[derive(Debug, Clone)]
pub struct Wallet {
    key: KeyMaterial,
    gas_defaults: GasDefaults,
}

impl Wallet {
    fn from_key(key: KeyMaterial) -> Self {
        Self {
            key,
            gas_defaults: GasDefaults::default(),
        }
    }

    pub fn from_mnemonic(phrase: &str, account_index: u32) -> WalletResult<Self> {
        Ok(Self::from_key(KeyMaterial::from_mnemonic(
            phrase,
            account_index,
        )?))
    }

    pub fn from_keystore_json(json: &str, password: &str) -> WalletResult<Self> {
        Ok(Self::from_key(KeyMaterial::from_keystore_json(
            json, password,
        )?))
    }

    pub fn from_pem(text: &str) -> WalletResult<Self> {
        Ok(Self::from_key(KeyMaterial::from_pem(text)?))
    }

    /// Restore from a string produced by [`Wallet::serialize`].
    pub fn from_serialized(serialized: &str) -> WalletResult<Self> {
        Ok(Self::from_key(secret::deserialize(serialized)?))
    }

    /// A brand new account. Returns the phrase too, since it is the only
    /// backup; the wallet itself is account 0 of that phrase.
    pub fn generate_random() -> WalletResult<(Self, Mnemonic)> {
        let mnemonic = Mnemonic::generate()?;
        let key = mnemonic.derive(0)?;
        debug!(address = %key.address(), "generated new wallet");
        Ok((Self::from_key(key), mnemonic))
    }

    /// Gas policy for [`Wallet::sign_transaction`].
    pub fn with_gas_defaults(mut self, gas_defaults: GasDefaults) -> Self {
        self.gas_defaults = gas_defaults;
        self
    }

    pub fn address(&self) -> &Address {
        self.key.address()
    }

    pub fn key(&self) -> &KeyMaterial {
        &self.key
    }

    /// See [`crate::secret::serialize`].
    pub fn serialize(&self) -> String {
        secret::serialize(&self.key)
    }

    /// See [`crate::secret::can_deserialize`].
    pub fn can_deserialize(serialized: &str) -> bool {
        secret::can_deserialize(serialized)
    }

    pub fn to_pem(&self) -> String {
        self.key.to_pem()
    }

    /// Encrypts the key under `password` into a fresh v4 keystore.
    pub fn to_keystore_json(&self, password: &str) -> WalletResult<String> {
        Ok(self.key.to_keystore_json(password)?)
    }

    /// Fetch the network config from `provider` and sign `draft`.
    pub async fn sign_transaction<P>(
        &self,
        draft: &UnsignedTransaction,
        provider: &P,
    ) -> WalletResult<SignedTransaction>
    where
        P: NetworkProvider + ?Sized,
    {
        let config = provider.get_network_config().await?;
        let signed = Signer::new(provider)
            .with_gas_defaults(self.gas_defaults)
            .sign(draft, &self.key, &config)
            .await?;
        Ok(signed)
    }
}

//! # Transaction Module
//!
//! Drafting, signing and verifying transfers.
//!
//! ## Architecture
//!
//! ```text
//! builder.rs  : UnsignedTransaction drafts and the fluent TransactionBuilder
//! value.rs    : Amount strings: validation, normalization, EGLD → smallest unit
//! gas.rs      : Gas limit/price defaults from the network config
//! canonical.rs: The exact bytes a signature covers
//! signed.rs   : SignedTransaction and signature verification
//! signing.rs  : Signer: draft + key + network config → SignedTransaction
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Draft** with [`TransactionBuilder`]. Leave out what the network knows.
//! 2. **Sign** with [`Signer::sign`], which fills the gaps and signs.
//! 3. **Submit** the [`SignedTransaction`] through a provider (not part of
//!    this crate).
//!
//! ## Design Decisions
//!
//! - Values stay strings end to end. 1 EGLD is 10^18 units, which does not
//!   fit comfortably in anything smaller than a bignum.
//! - The signed bytes are JSON because the network defines them that way,
//!   with a fixed key order and a couple of omission rules; `canonical.rs`
//!   owns all of that.

pub mod builder;
pub mod canonical;
pub mod gas;
pub mod signed;
pub mod signing;
pub mod value;

pub use builder::{TransactionBuilder, UnsignedTransaction};
pub use gas::{min_gas_limit, set_default_gas_price_and_limit, with_default_gas};
pub use signed::SignedTransaction;
pub use signing::{GasDefaults, Signer, SigningError};
pub use value::{from_coins, normalize_value, ValueError};

// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Elrond Wallet: Core Library
//!
//! Key management and transaction signing for Elrond accounts. Everything
//! here runs offline except the two questions a signer has to ask the
//! network (its config and the sender's nonce), which go through the
//! [`provider::NetworkProvider`] trait so you can answer them however you
//! like.
//!
//! ## Architecture
//!
//! - **address**: `erd1…` bech32 addresses over raw Ed25519 public keys.
//! - **crypto**: Key material, signatures and the hashes everything else uses.
//! - **import**: Getting keys in and out: BIP-39 mnemonics, v4 JSON
//!   keystores and PEM files.
//! - **secret**: The tagged hex string used to park a key in session storage.
//! - **transaction**: Drafting, gas defaults, canonical bytes and signing.
//! - **provider**: What the signer needs to know about the network.
//! - **dns**: Which shard's DNS contract owns a herotag.
//! - **wallet**: The facade tying the above together for one account.
//! - **config**: Derivation path, keystore parameters and other constants.
//! - **error**: The crate-wide error type and its coarse kinds.
//!
//! ## Design Philosophy
//!
//! 1. Secrets never show up in `Debug` output or logs.
//! 2. Whatever bytes get signed can be rebuilt and checked from the signed
//!    transaction alone.
//! 3. Fail with a typed error before touching the network when the input
//!    is already wrong.

pub mod address;
pub mod config;
pub mod crypto;
pub mod dns;
pub mod error;
pub mod import;
pub mod provider;
pub mod secret;
pub mod transaction;
pub mod wallet;

pub use address::Address;
pub use crypto::{KeyMaterial, Signature};
pub use error::{ErrorKind, WalletError, WalletResult};
pub use wallet::Wallet;

//! # Key Importers
//!
//! Every way a user can hand us an existing account:
//!
//! | Source   | Secret protection      | Module       |
//! |----------|------------------------|--------------|
//! | Mnemonic | none (the phrase is it)| [`mnemonic`] |
//! | Keystore | password + scrypt      | [`keystore`] |
//! | PEM      | none                   | [`pem`]      |
//!
//! All of them end in a [`crate::crypto::KeyMaterial`] and either succeed
//! completely or fail without producing one. Keystore and PEM can also be
//! written back out.

pub mod keystore;
pub mod mnemonic;
pub mod pem;

pub use keystore::{Keystore, KeystoreError};
pub use mnemonic::{Mnemonic, MnemonicError};
pub use pem::PemError;

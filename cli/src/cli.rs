//! # CLI Interface
//!
//! Defines the command-line argument structure for `erd-wallet` using
//! `clap` derive. Every command that needs a key takes the same key source
//! flags, and exactly one source must be given.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use elrond_wallet::config::{
    DEFAULT_GAS_PER_DATA_BYTE, DEFAULT_MIN_GAS_LIMIT, DEFAULT_MIN_GAS_PRICE,
    DEFAULT_MNEMONIC_WORDS, DEFAULT_TRANSACTION_VERSION, LOCAL_TESTNET_CHAIN_ID,
};

use crate::logging::LogFormat;

/// Offline wallet for Elrond accounts.
///
/// Imports keys from mnemonics, JSON keystores, PEM files or serialized
/// secrets, converts between those formats, and signs transactions without
/// talking to the network.
#[derive(Parser, Debug)]
#[command(
    name = "erd-wallet",
    about = "Offline wallet for Elrond accounts",
    version,
    propagate_version = true
)]
pub struct ErdWalletCli {
    /// Default log filter when `RUST_LOG` is not set.
    #[arg(long, global = true, env = "ERD_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the wallet binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new mnemonic and print it with its first address.
    Generate(GenerateArgs),
    /// Print the address of a key.
    Address(KeyArgs),
    /// Print the serialized form of a key, for session storage.
    Serialize(KeyArgs),
    /// Write a key as a PEM file.
    ExportPem(ExportPemArgs),
    /// Encrypt a key into a JSON keystore.
    ExportKeystore(ExportKeystoreArgs),
    /// Sign a transaction offline and print it as JSON.
    Sign(SignArgs),
    /// Print the shard and DNS contract responsible for a herotag.
    DnsShard(DnsShardArgs),
}

/// Where the key comes from. At most one of these.
#[derive(Args, Debug)]
#[group(id = "key_source", multiple = false)]
pub struct KeySource {
    /// BIP-39 mnemonic phrase.
    ///
    /// Prefer the environment variable: command-line arguments end up in
    /// shell history and process listings.
    #[arg(long, env = "ERD_MNEMONIC", hide_env_values = true)]
    pub mnemonic: Option<String>,

    /// Path to a JSON keystore file. Needs `--password`.
    #[arg(long)]
    pub keystore: Option<PathBuf>,

    /// Path to a PEM key file.
    #[arg(long)]
    pub pem: Option<PathBuf>,

    /// Serialized secret as printed by `erd-wallet serialize`.
    #[arg(long, env = "ERD_SERIALIZED", hide_env_values = true)]
    pub serialized: Option<String>,
}

/// Key source flags shared by every command that needs a key.
#[derive(Args, Debug)]
pub struct KeyArgs {
    #[command(flatten)]
    pub source: KeySource,

    /// Account index, used with `--mnemonic`.
    #[arg(long, default_value_t = 0)]
    pub index: u32,

    /// Keystore password, used with `--keystore`.
    #[arg(long, env = "ERD_KEYSTORE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of words: 12, 15, 18, 21 or 24.
    #[arg(long, default_value_t = DEFAULT_MNEMONIC_WORDS)]
    pub words: usize,
}

/// Arguments for the `export-pem` subcommand.
#[derive(Args, Debug)]
pub struct ExportPemArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Output file. Prints to stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `export-keystore` subcommand.
#[derive(Args, Debug)]
pub struct ExportKeystoreArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Output file for the keystore JSON.
    #[arg(long)]
    pub out: PathBuf,

    /// Password protecting the new keystore.
    #[arg(long, env = "ERD_NEW_KEYSTORE_PASSWORD", hide_env_values = true)]
    pub new_password: String,
}

/// Arguments for the `sign` subcommand.
///
/// The network is never contacted: chain id, gas parameters and the nonce
/// come from these flags, with defaults matching a local testnet.
#[derive(Args, Debug)]
pub struct SignArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Receiver address (`erd1...`).
    #[arg(long)]
    pub receiver: String,

    /// Amount in the smallest unit.
    #[arg(long, default_value = "0", conflicts_with = "egld")]
    pub value: String,

    /// Amount in EGLD, up to 18 decimals. Alternative to `--value`.
    #[arg(long)]
    pub egld: Option<String>,

    /// Transaction payload.
    #[arg(long)]
    pub data: Option<String>,

    /// Sender nonce. Defaults to `--account-nonce`.
    #[arg(long)]
    pub nonce: Option<u64>,

    /// Nonce the sender account currently has, as a provider would report it.
    #[arg(long, default_value_t = 0)]
    pub account_nonce: u64,

    #[arg(long)]
    pub gas_price: Option<u64>,

    #[arg(long)]
    pub gas_limit: Option<u64>,

    /// Leave gas price and limit out of the signature when not given.
    #[arg(long)]
    pub no_default_gas: bool,

    #[arg(long, env = "ERD_CHAIN_ID", default_value = LOCAL_TESTNET_CHAIN_ID)]
    pub chain_id: String,

    #[arg(long, default_value_t = DEFAULT_TRANSACTION_VERSION)]
    pub tx_version: u32,

    #[arg(long, default_value_t = DEFAULT_MIN_GAS_PRICE)]
    pub min_gas_price: u64,

    #[arg(long, default_value_t = DEFAULT_MIN_GAS_LIMIT)]
    pub min_gas_limit: u64,

    #[arg(long, default_value_t = DEFAULT_GAS_PER_DATA_BYTE)]
    pub gas_per_data_byte: u64,
}

/// Arguments for the `dns-shard` subcommand.
#[derive(Args, Debug)]
pub struct DnsShardArgs {
    /// Herotag, e.g. `alice.elrond`.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Ensures the derive macros produce a valid CLI definition.
        ErdWalletCli::command().debug_assert();
    }

    #[test]
    fn key_sources_are_mutually_exclusive() {
        let res = ErdWalletCli::try_parse_from([
            "erd-wallet",
            "address",
            "--pem",
            "a.pem",
            "--keystore",
            "a.json",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn sign_defaults_to_local_testnet() {
        let cli = ErdWalletCli::try_parse_from([
            "erd-wallet",
            "sign",
            "--pem",
            "alice.pem",
            "--receiver",
            "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th",
        ])
        .unwrap();
        let Commands::Sign(args) = cli.command else {
            panic!("expected sign");
        };
        assert_eq!(args.value, "0");
        assert_eq!(args.tx_version, DEFAULT_TRANSACTION_VERSION);
        assert_eq!(args.min_gas_limit, DEFAULT_MIN_GAS_LIMIT);
        assert!(!args.no_default_gas);
    }

    #[test]
    fn value_and_egld_conflict() {
        let res = ErdWalletCli::try_parse_from([
            "erd-wallet",
            "sign",
            "--pem",
            "alice.pem",
            "--receiver",
            "erd1x",
            "--value",
            "1",
            "--egld",
            "1",
        ]);
        assert!(res.is_err());
    }
}

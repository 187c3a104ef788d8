// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Elrond Wallet CLI
//!
//! Entry point for the `erd-wallet` binary. Parses CLI arguments, initializes
//! logging, loads a key from whichever source was given and runs the
//! requested command.
//!
//! - `generate`       : new mnemonic and its first address
//! - `address`        : print the address of a key
//! - `serialize`      : print the serialized secret
//! - `export-pem`     : write a PEM file
//! - `export-keystore`: write an encrypted JSON keystore
//! - `sign`           : sign a transaction offline
//! - `dns-shard`      : shard and DNS contract for a herotag
//!
//! Results go to stdout, logs to stderr.

mod cli;
mod logging;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use secrecy::{ExposeSecret, SecretString};

use elrond_wallet::dns::{name_shard, Dns, DnsConfig};
use elrond_wallet::import::Mnemonic;
use elrond_wallet::provider::{NetworkConfig, StaticProvider};
use elrond_wallet::transaction::{from_coins, GasDefaults, TransactionBuilder};
use elrond_wallet::Wallet;

use cli::{Commands, ErdWalletCli, KeyArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ErdWalletCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Address(args) => {
            println!("{}", load_wallet(args)?.address());
            Ok(())
        }
        Commands::Serialize(args) => {
            println!("{}", load_wallet(args)?.serialize());
            Ok(())
        }
        Commands::ExportPem(args) => export_pem(args),
        Commands::ExportKeystore(args) => export_keystore(args),
        Commands::Sign(args) => sign(args).await,
        Commands::DnsShard(args) => dns_shard(args),
    }
}

/// Resolves the key source flags into a wallet.
fn load_wallet(args: KeyArgs) -> Result<Wallet> {
    let KeyArgs {
        source,
        index,
        password,
    } = args;

    let wallet = if let Some(phrase) = source.mnemonic {
        let phrase = SecretString::from(phrase);
        Wallet::from_mnemonic(phrase.expose_secret(), index)
            .context("failed to import mnemonic")?
    } else if let Some(path) = source.keystore {
        let Some(password) = password.map(SecretString::from) else {
            bail!("--keystore needs --password (or ERD_KEYSTORE_PASSWORD)");
        };
        let json = read_file(&path)?;
        Wallet::from_keystore_json(&json, password.expose_secret())
            .with_context(|| format!("failed to open keystore {}", path.display()))?
    } else if let Some(path) = source.pem {
        let text = SecretString::from(read_file(&path)?);
        Wallet::from_pem(text.expose_secret())
            .with_context(|| format!("failed to import PEM {}", path.display()))?
    } else if let Some(serialized) = source.serialized {
        let serialized = SecretString::from(serialized);
        Wallet::from_serialized(serialized.expose_secret())
            .context("failed to restore serialized secret")?
    } else {
        bail!("no key given: use --mnemonic, --keystore, --pem or --serialized");
    };

    tracing::debug!(address = %wallet.address(), "key loaded");
    Ok(wallet)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Writes `contents` to `path`, readable by the owner only on Unix.
fn write_secret_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
            .with_context(|| format!("failed to restrict permissions on {}", path.display()))?;
    }

    Ok(())
}

fn generate(args: cli::GenerateArgs) -> Result<()> {
    let mnemonic =
        Mnemonic::generate_with_word_count(args.words).context("failed to generate mnemonic")?;
    let key = mnemonic.derive(0).context("failed to derive account 0")?;

    tracing::info!(address = %key.address(), words = mnemonic.word_count(), "generated wallet");

    println!("Mnemonic : {}", mnemonic.phrase());
    println!("Address  : {}", key.address());
    Ok(())
}

fn export_pem(args: cli::ExportPemArgs) -> Result<()> {
    let pem = SecretString::from(load_wallet(args.key)?.to_pem());
    match args.out {
        Some(path) => {
            write_secret_file(&path, pem.expose_secret())?;
            tracing::info!(path = %path.display(), "PEM written");
        }
        None => print!("{}", pem.expose_secret()),
    }
    Ok(())
}

fn export_keystore(args: cli::ExportKeystoreArgs) -> Result<()> {
    let wallet = load_wallet(args.key)?;
    let password = SecretString::from(args.new_password);
    let json = wallet
        .to_keystore_json(password.expose_secret())
        .context("failed to encrypt keystore")?;
    write_secret_file(&args.out, &json)?;

    tracing::info!(address = %wallet.address(), path = %args.out.display(), "keystore written");
    println!("{}", args.out.display());
    Ok(())
}

async fn sign(args: cli::SignArgs) -> Result<()> {
    let wallet = load_wallet(args.key)?;

    let value = match &args.egld {
        Some(egld) => from_coins(egld).with_context(|| format!("invalid EGLD amount {egld:?}"))?,
        None => args.value,
    };

    let config = NetworkConfig {
        chain_id: args.chain_id,
        min_transaction_version: args.tx_version,
        min_gas_price: args.min_gas_price,
        min_gas_limit: args.min_gas_limit,
        gas_per_data_byte: args.gas_per_data_byte,
        ..NetworkConfig::default()
    };
    let provider = StaticProvider::new(config).with_nonce(*wallet.address(), args.account_nonce);

    let mut builder = TransactionBuilder::new()
        .sender(&wallet.address().to_bech32())
        .receiver(&args.receiver)
        .value(&value);
    if let Some(nonce) = args.nonce {
        builder = builder.nonce(nonce);
    }
    if let Some(gas_price) = args.gas_price {
        builder = builder.gas_price(gas_price);
    }
    if let Some(gas_limit) = args.gas_limit {
        builder = builder.gas_limit(gas_limit);
    }
    if let Some(data) = &args.data {
        builder = builder.data(data);
    }

    let gas_defaults = if args.no_default_gas {
        GasDefaults::Unset
    } else {
        GasDefaults::FromNetwork
    };

    let signed = wallet
        .with_gas_defaults(gas_defaults)
        .sign_transaction(&builder.build(), &provider)
        .await
        .context("failed to sign transaction")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&signed).context("failed to encode transaction")?
    );
    Ok(())
}

fn dns_shard(args: cli::DnsShardArgs) -> Result<()> {
    let dns = Dns::new(DnsConfig::default()).context("invalid DNS contract table")?;
    let shard = name_shard(&args.name);
    println!("Shard    : {shard}");
    println!("Contract : {}", dns.contract_for_shard(shard));
    Ok(())
}

// Signing & key import benchmarks for the wallet library.
//
// Covers Ed25519 signing and verification, mnemonic derivation, keystore
// decryption at the default scrypt cost, and the full transaction signing
// path against an in-memory provider.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use elrond_wallet::crypto::{sign, verify, KeyMaterial};
use elrond_wallet::import::Mnemonic;
use elrond_wallet::provider::StaticProvider;
use elrond_wallet::transaction::TransactionBuilder;
use elrond_wallet::Wallet;

const PHRASE: &str = "fringe dry little minor note hundred lottery garment announce space throw captain seven slim common piece blame battle void pistol diagram melody phone mother";

fn bench_sign_message(c: &mut Criterion) {
    let key = KeyMaterial::generate();
    let message = b"{\"nonce\":42,\"value\":\"1000000000000000000\"}";

    c.bench_function("ed25519/sign_message", |b| {
        b.iter(|| sign(&key, message));
    });
}

fn bench_verify_signature(c: &mut Criterion) {
    let key = KeyMaterial::generate();
    let message = b"{\"nonce\":42,\"value\":\"1000000000000000000\"}";
    let signature = sign(&key, message);

    c.bench_function("ed25519/verify_signature", |b| {
        b.iter(|| verify(key.address(), message, &signature));
    });
}

fn bench_mnemonic_derive(c: &mut Criterion) {
    let mnemonic = Mnemonic::from_phrase(PHRASE).unwrap();
    let mut group = c.benchmark_group("mnemonic/derive");

    for accounts in [1u32, 10] {
        group.throughput(Throughput::Elements(u64::from(accounts)));
        group.bench_with_input(BenchmarkId::from_parameter(accounts), &accounts, |b, &n| {
            b.iter(|| {
                for i in 0..n {
                    mnemonic.derive(i).unwrap();
                }
            });
        });
    }

    group.finish();
}

fn bench_keystore_decrypt(c: &mut Criterion) {
    let key = KeyMaterial::generate();
    let json = key.to_keystore_json("password").unwrap();

    let mut group = c.benchmark_group("keystore");
    group.sample_size(10);
    group.bench_function("decrypt_scrypt_4096", |b| {
        b.iter(|| KeyMaterial::from_keystore_json(&json, "password").unwrap());
    });
    group.finish();
}

fn bench_sign_transaction(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let wallet = Wallet::from_mnemonic(PHRASE, 0).unwrap();
    let me = wallet.address().to_bech32();
    let provider = StaticProvider::default().with_nonce(*wallet.address(), 42);
    let draft = TransactionBuilder::new()
        .sender(&me)
        .receiver(&me)
        .value("1000000000000000000")
        .data("bench")
        .build();

    c.bench_function("transaction/sign", |b| {
        b.iter(|| {
            runtime
                .block_on(wallet.sign_transaction(&draft, &provider))
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_sign_message,
    bench_verify_signature,
    bench_mnemonic_derive,
    bench_keystore_decrypt,
    bench_sign_transaction,
);
criterion_main!(benches);

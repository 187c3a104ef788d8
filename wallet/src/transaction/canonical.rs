//! The exact bytes a transaction signature covers.
//!
//! The network recomputes these bytes from the submitted fields and checks
//! the signature against them, so every detail here is load-bearing:
//!
//! - compact JSON, no whitespace;
//! - keys in this order: `nonce, value, receiver, sender, gasPrice, gasLimit,
//!   data, chainID, version` (note `chainID`, not `chainId`);
//! - integers as JSON numbers, `value` as a JSON string;
//! - `data` base64-encoded, and omitted entirely when empty;
//! - `gasPrice` / `gasLimit` omitted when absent.
//!
//! Field order is the struct's declaration order, which serde preserves.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

#[derive(Serialize)]
struct CanonicalTransaction<'a> {
    nonce: u64,
    value: &'a str,
    receiver: &'a str,
    sender: &'a str,
    #[serde(rename = "gasPrice", skip_serializing_if = "Option::is_none")]
    gas_price: Option<u64>,
    #[serde(rename = "gasLimit", skip_serializing_if = "Option::is_none")]
    gas_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<String>,
    #[serde(rename = "chainID")]
    chain_id: &'a str,
    version: u32,
}

/// Fields that enter the signature, borrowed from whatever holds them.
#[derive(Debug, Clone, Copy)]
pub struct SignableFields<'a> {
    pub nonce: u64,
    pub value: &'a str,
    pub receiver: &'a str,
    pub sender: &'a str,
    pub gas_price: Option<u64>,
    pub gas_limit: Option<u64>,
    /// Raw (not yet base64-encoded) payload.
    pub data: &'a str,
    pub chain_id: &'a str,
    pub version: u32,
}

/// Serialize the fields into their canonical signing form.
pub fn canonical_bytes(fields: &SignableFields<'_>) -> Result<Vec<u8>, serde_json::Error> {
    let canonical = CanonicalTransaction {
        nonce: fields.nonce,
        value: fields.value,
        receiver: fields.receiver,
        sender: fields.sender,
        gas_price: fields.gas_price,
        gas_limit: fields.gas_limit,
        data: (!fields.data.is_empty()).then(|| STANDARD.encode(fields.data)),
        chain_id: fields.chain_id,
        version: fields.version,
    };
    serde_json::to_vec(&canonical)
}

//! Unsigned transaction drafts and the builder that assembles them.
//!
//! A draft is what a caller *wants* to send. Anything they leave out (nonce,
//! gas price, gas limit) is filled in at signing time from the network. The
//! builder does not sign and does not validate addresses; both happen in
//! [`super::signing`], so drafts can be assembled without key material.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// UnsignedTransaction
// ---------------------------------------------------------------------------

/// A transaction draft.
///
/// `value` is a base-10 integer string in the smallest unit. Optional fields
/// are filled in by the signer; see [`super::Signer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedTransaction {
    /// Sender address (bech32). Must belong to the signing key.
    pub sender: String,

    /// Receiver address (bech32).
    pub receiver: String,

    /// Amount to transfer, in the smallest unit.
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<u64>,

    /// Free-form payload, e.g. a smart contract call `fn@arg1@arg2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Opaque options for the signer. Never signed, never sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl UnsignedTransaction {
    /// The payload, or `""` if there is none.
    pub fn data_or_empty(&self) -> &str {
        self.data.as_deref().unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`UnsignedTransaction`].
///
/// # Usage
///
/// ```rust
/// use elrond_wallet::transaction::TransactionBuilder;
///
/// let draft = TransactionBuilder::new()
///     .sender("erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th")
///     .receiver("erd1tcylw3y4s2y43xps0cjuvgql2zld9aze4c7ku6ekhezu39tpag5q6audht")
///     .value("1000000000000000000")
///     .data("hello")
///     .build();
///
/// assert_eq!(draft.nonce, None);
/// assert_eq!(draft.data.as_deref(), Some("hello"));
/// ```
///
/// The default value is `"0"`. Everything else left unset stays `None`.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    tx: UnsignedTransaction,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self {
            tx: UnsignedTransaction {
                value: "0".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn sender(mut self, address: &str) -> Self {
        self.tx.sender = address.to_string();
        self
    }

    pub fn receiver(mut self, address: &str) -> Self {
        self.tx.receiver = address.to_string();
        self
    }

    /// Sets the amount in the smallest unit.
    pub fn value(mut self, value: &str) -> Self {
        self.tx.value = value.to_string();
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.tx.nonce = Some(nonce);
        self
    }

    pub fn gas_price(mut self, gas_price: u64) -> Self {
        self.tx.gas_price = Some(gas_price);
        self
    }

    pub fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.tx.gas_limit = Some(gas_limit);
        self
    }

    pub fn data(mut self, data: &str) -> Self {
        self.tx.data = Some(data.to_string());
        self
    }

    pub fn meta(mut self, meta: serde_json::Value) -> Self {
        self.tx.meta = Some(meta);
        self
    }

    pub fn build(self) -> UnsignedTransaction {
        self.tx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_leaves_network_fields_unset() {
        let tx = TransactionBuilder::new().sender("a").receiver("b").build();
        assert_eq!(tx.value, "0");
        assert_eq!(tx.nonce, None);
        assert_eq!(tx.gas_price, None);
        assert_eq!(tx.gas_limit, None);
        assert_eq!(tx.data_or_empty(), "");
    }

    #[test]
    fn builder_sets_every_field() {
        let tx = TransactionBuilder::new()
            .sender("a")
            .receiver("b")
            .value("5")
            .nonce(3)
            .gas_price(10)
            .gas_limit(20)
            .data("x")
            .meta(serde_json::json!({ "hint": 1 }))
            .build();

        assert_eq!(
            tx,
            UnsignedTransaction {
                sender: "a".into(),
                receiver: "b".into(),
                value: "5".into(),
                nonce: Some(3),
                gas_price: Some(10),
                gas_limit: Some(20),
                data: Some("x".into()),
                meta: Some(serde_json::json!({ "hint": 1 })),
            }
        );
    }

    #[test]
    fn draft_json_uses_camel_case_and_skips_unset() {
        let tx = TransactionBuilder::new()
            .sender("a")
            .receiver("b")
            .gas_price(7)
            .build();
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["gasPrice"], 7);
        assert!(json.get("gasLimit").is_none());
        assert!(json.get("nonce").is_none());

        let back: UnsignedTransaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, tx);
    }
}

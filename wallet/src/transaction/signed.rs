//! Signed transactions, ready to hand to a provider.

use serde::{Deserialize, Serialize};

use super::canonical::{canonical_bytes, SignableFields};
use crate::address::Address;
use crate::crypto::{verify, Signature};

/// A transaction with every field fixed and a signature over them.
///
/// Serializes with camelCase keys (`gasPrice`, `gasLimit`, `chainId`). This
/// is the submission form, which is not the same JSON as the signed bytes;
/// see [`super::canonical`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    pub nonce: u64,

    /// Normalized base-10 amount in the smallest unit.
    pub value: String,

    pub receiver: String,

    pub sender: String,

    /// `None` only when signed with [`super::GasDefaults::Unset`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<u64>,

    /// Raw payload. Empty string when the draft had none.
    #[serde(default)]
    pub data: String,

    pub chain_id: String,

    pub version: u32,

    /// Ed25519 signature over [`Self::signable_bytes`], lowercase hex.
    pub signature: String,
}

impl SignedTransaction {
    pub(crate) fn signable_fields(&self) -> SignableFields<'_> {
        SignableFields {
            nonce: self.nonce,
            value: &self.value,
            receiver: &self.receiver,
            sender: &self.sender,
            gas_price: self.gas_price,
            gas_limit: self.gas_limit,
            data: &self.data,
            chain_id: &self.chain_id,
            version: self.version,
        }
    }

    /// The canonical bytes the signature covers. Excludes `signature`.
    pub fn signable_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        canonical_bytes(&self.signable_fields())
    }

    /// Checks the signature against the sender's public key.
    ///
    /// Any change to a signed field after signing makes this `false`, as does
    /// an unparseable sender or signature.
    pub fn verify(&self) -> bool {
        let Ok(sender) = Address::from_bech32(&self.sender) else {
            return false;
        };
        let Ok(signature) = Signature::from_hex(&self.signature) else {
            return false;
        };
        let Ok(bytes) = self.signable_bytes() else {
            return false;
        };
        verify(&sender, &bytes, &signature)
    }
}

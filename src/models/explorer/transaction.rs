use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::Fixed8;

/// Reference to a previous output spent (or claimed) by a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
	/// Transaction holding the referenced output
	pub txid: String,

	/// Index of the referenced output
	pub vout: u32,

	/// Asset of the referenced output, when the backend resolves it
	#[serde(skip_serializing_if = "Option::is_none")]
	pub asset: Option<String>,

	/// Value of the referenced output, when the backend resolves it
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<Fixed8>,

	/// Owner of the referenced output, when the backend resolves it
	#[serde(skip_serializing_if = "Option::is_none")]
	pub address_hash: Option<String>,
}

/// An output created by a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
	pub n: u32,
	pub asset: String,
	pub value: Fixed8,
	pub address_hash: String,
}

/// Witness script attached to a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
	pub invocation: String,
	pub verification: String,
}

/// Canonical transaction record
///
/// Field names follow the explorer wire format; fees are normalized to
/// [`Fixed8`] and time to a unix timestamp regardless of how the backend sent them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
	pub txid: String,
	pub size: u64,
	#[serde(rename = "type")]
	pub tx_type: String,
	pub version: u32,
	pub attributes: Vec<Value>,
	pub vin: Vec<TransactionInput>,
	pub vout: Vec<TransactionOutput>,
	pub claims: Vec<TransactionInput>,
	pub sys_fee: Fixed8,
	pub net_fee: Fixed8,
	pub scripts: Vec<Script>,
	pub block_height: u64,
	pub time: u64,
}

/// Net effect of a past transaction on one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastTransaction {
	pub transaction_id: String,
	pub block_height: u64,

	/// Net change per asset symbol; positive for credits, negative for debits
	pub change: BTreeMap<String, Fixed8>,
}

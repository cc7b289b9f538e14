//! Wire shapes of the Neoscan `/v1` API.

use serde::Deserialize;
use serde_json::Value;

use crate::{
	models::{Fixed8, Script},
	services::explorer::clients::common::{RawClaimable, RawUnspent},
};

#[derive(Debug, Clone, Deserialize)]
pub struct NeoscanBalance {
	/// Asset symbol (`NEO`, `GAS`, token symbol)
	pub asset: String,
	pub amount: Option<Fixed8>,
	#[serde(default)]
	pub unspent: Vec<RawUnspent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoscanGetBalanceResponse {
	pub balance: Option<Vec<NeoscanBalance>>,
	pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoscanGetClaimableResponse {
	pub claimable: Option<Vec<RawClaimable>>,
	pub address: Option<String>,
}

/// Input, output or claim reference of a Neoscan transaction
#[derive(Debug, Clone, Deserialize)]
pub struct NeoscanTxIo {
	pub txid: String,
	pub n: u32,
	pub asset: String,
	pub value: Fixed8,
	pub address_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoscanTransaction {
	pub txid: String,
	pub size: u64,
	#[serde(rename = "type")]
	pub tx_type: String,
	#[serde(default)]
	pub version: u32,
	#[serde(default)]
	pub attributes: Vec<Value>,
	#[serde(default)]
	pub vin: Vec<NeoscanTxIo>,
	#[serde(default)]
	pub vouts: Vec<NeoscanTxIo>,
	pub claims: Option<Vec<NeoscanTxIo>>,
	pub sys_fee: Fixed8,
	pub net_fee: Fixed8,
	#[serde(default)]
	pub scripts: Vec<Script>,
	pub block_height: u64,
	pub time: u64,
}

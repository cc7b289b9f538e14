//! Wire shapes of the Dora API.

use serde::Deserialize;
use serde_json::Value;

use crate::{
	models::{Fixed8, Script},
	services::explorer::clients::common::{RawClaimable, RawUnspent},
	utils::deserialize_u64_from_number_or_string,
};

#[derive(Debug, Clone, Deserialize)]
pub struct DoraBalance {
	pub asset_hash: Option<String>,
	pub asset: Option<String>,
	pub asset_symbol: Option<String>,
	pub amount: Option<Fixed8>,
	#[serde(default)]
	pub unspent: Vec<RawUnspent>,
}

impl DoraBalance {
	/// Best available name for the asset: symbol, then name, then hash
	pub fn symbol(&self) -> String {
		self.asset_symbol
			.as_deref()
			.or(self.asset.as_deref())
			.or(self.asset_hash.as_deref())
			.unwrap_or_default()
			.to_string()
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoraGetBalanceResponse {
	pub balance: Option<Vec<DoraBalance>>,
	pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoraGetClaimableResponse {
	pub address: Option<String>,
	pub claimable: Option<Vec<RawClaimable>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoraVin {
	pub txid: String,
	pub vout: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoraVout {
	pub n: u32,
	pub asset: String,
	pub value: Fixed8,
	pub address: String,
}

/// Transaction as served by `/transaction/{txid}`; fees and time arrive as strings
#[derive(Debug, Clone, Deserialize)]
pub struct DoraTransaction {
	pub txid: String,
	pub size: u64,
	#[serde(rename = "type")]
	pub tx_type: String,
	#[serde(default)]
	pub version: u32,
	#[serde(default)]
	pub attributes: Vec<Value>,
	#[serde(default)]
	pub vin: Vec<DoraVin>,
	#[serde(default)]
	pub vout: Vec<DoraVout>,
	#[serde(default)]
	pub claims: Vec<DoraVin>,
	pub sys_fee: Fixed8,
	pub net_fee: Fixed8,
	#[serde(default)]
	pub scripts: Vec<Script>,
	pub block: u64,
	#[serde(deserialize_with = "deserialize_u64_from_number_or_string")]
	pub time: u64,
}

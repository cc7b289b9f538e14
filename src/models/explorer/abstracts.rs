use serde::{Deserialize, Serialize};

use crate::models::Fixed8;

/// One transfer event in an address's activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbstractEntry {
	pub transaction_id: String,
	pub time: u64,
	pub block_height: u64,
	pub asset: String,
	pub amount: Fixed8,
	pub address_to: String,
	pub address_from: String,
}

/// One page of an address's activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressAbstracts {
	pub total_pages: u32,
	pub total_entries: u64,
	pub page_size: u32,
	pub page_number: u32,
	pub entries: Vec<AbstractEntry>,
}

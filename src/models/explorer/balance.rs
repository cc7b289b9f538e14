use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Fixed8;

/// A single unspent output of a native asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
	/// Amount held by the output
	pub value: Fixed8,

	/// Transaction that created the output
	pub txid: String,

	/// Position of the output in that transaction
	pub index: u32,
}

/// Balance of a native asset with its unspent breakdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBalance {
	/// Total amount held
	pub balance: Fixed8,

	/// Unspent outputs making up the balance, in backend order
	pub unspent: Vec<Coin>,
}

/// Canonical balance of an address
///
/// Native assets keep their unspent outputs; tokens collapse to a scalar.
/// Maps are ordered, so symbol lists derived from them are sorted and unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
	/// Network the balance was read from
	pub net: String,

	/// Address that was queried
	pub address: String,

	/// Native asset balances keyed by symbol
	pub assets: BTreeMap<String, AssetBalance>,

	/// Token balances keyed by symbol
	pub tokens: BTreeMap<String, Fixed8>,
}

impl Balance {
	/// Creates an empty balance for `address` on `net`
	pub fn new(net: impl Into<String>, address: impl Into<String>) -> Self {
		Self {
			net: net.into(),
			address: address.into(),
			assets: BTreeMap::new(),
			tokens: BTreeMap::new(),
		}
	}

	/// Sorted symbols of the native assets held
	pub fn asset_symbols(&self) -> Vec<String> {
		self.assets.keys().cloned().collect()
	}

	/// Sorted symbols of the tokens held
	pub fn token_symbols(&self) -> Vec<String> {
		self.tokens.keys().cloned().collect()
	}

	pub fn is_empty(&self) -> bool {
		self.assets.is_empty() && self.tokens.is_empty()
	}

	/// Merges a native asset entry; repeated symbols accumulate
	pub(crate) fn add_asset(&mut self, symbol: &str, asset: AssetBalance) {
		let entry = self.assets.entry(symbol.to_string()).or_default();
		entry.balance += asset.balance;
		entry.unspent.extend(asset.unspent);
	}

	/// Merges a token entry; repeated symbols accumulate
	pub(crate) fn add_token(&mut self, symbol: &str, amount: Fixed8) {
		*self.tokens.entry(symbol.to_string()).or_default() += amount;
	}
}

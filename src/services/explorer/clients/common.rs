//! Response handling shared by both explorer backends.
//!
//! The backends disagree on envelopes and field names but agree on most entry
//! shapes, so the per-backend transformers normalize into the raw types here and
//! let these helpers build the canonical records.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use crate::{
	models::{
		asset_symbol, is_native_asset, AbstractEntry, AddressAbstracts, AssetBalance, Balance,
		ClaimItem, Claims, Coin, Fixed8, PastTransaction, GAS_SYMBOL, NEO_SYMBOL,
	},
	services::explorer::ProviderError,
	utils::deserialize_u64_from_number_or_string,
};

/// Message used when an explorer answers without the queried address
pub const MALFORMED_ADDRESS_MESSAGE: &str = "No response. Address might be malformed.";

/// Message used when the abstracts endpoint answers with an empty object
pub const EMPTY_ABSTRACTS_MESSAGE: &str = "Empty Response. Address may not exist";

/// Decodes a raw explorer response into `R`
///
/// Any shape mismatch is reported as a malformed response for `operation`.
pub fn decode_response<R: DeserializeOwned>(
	raw: Value,
	operation: &str,
	identifier: &str,
) -> Result<R, ProviderError> {
	serde_json::from_value(raw).map_err(|e| {
		ProviderError::malformed_response(
			operation,
			identifier,
			format!("Unexpected response shape: {}", e),
			Some(Box::new(e)),
			None,
		)
	})
}

/// Fails unless the explorer echoed a non-empty address back
pub fn require_address(
	echoed: Option<&str>,
	operation: &str,
	address: &str,
) -> Result<(), ProviderError> {
	match echoed {
		Some(echoed) if !echoed.is_empty() => Ok(()),
		_ => Err(ProviderError::malformed_response(
			operation,
			address,
			MALFORMED_ADDRESS_MESSAGE,
			None,
			Some(HashMap::from([("address".to_string(), address.to_string())])),
		)),
	}
}

/// An unspent output as listed in balance responses
#[derive(Debug, Clone, Deserialize)]
pub struct RawUnspent {
	pub txid: String,
	pub value: Fixed8,
	pub n: u32,
}

/// A balance entry after backend-specific symbol resolution
#[derive(Debug, Clone)]
pub struct BalanceEntry {
	pub symbol: String,
	pub amount: Option<Fixed8>,
	pub unspent: Vec<RawUnspent>,
}

/// Partitions balance entries into native assets and tokens
///
/// Native assets keep their unspent outputs; tokens collapse to their amount.
/// When an entry carries no amount, the sum of its unspent outputs is used.
pub fn assemble_balance(
	net: &str,
	address: &str,
	entries: impl IntoIterator<Item = BalanceEntry>,
) -> Balance {
	let mut balance = Balance::new(net, address);

	for entry in entries {
		let symbol = asset_symbol(&entry.symbol);
		let amount = entry
			.amount
			.unwrap_or_else(|| entry.unspent.iter().map(|coin| coin.value).sum());

		if is_native_asset(&symbol) {
			let unspent = entry
				.unspent
				.into_iter()
				.map(|coin| Coin {
					value: coin.value,
					txid: coin.txid,
					index: coin.n,
				})
				.collect();
			balance.add_asset(
				&symbol,
				AssetBalance {
					balance: amount,
					unspent,
				},
			);
		} else {
			balance.add_token(&symbol, amount);
		}
	}

	balance
}

/// A claimable output as listed by both backends
#[derive(Debug, Clone, Deserialize)]
pub struct RawClaimable {
	pub txid: String,
	pub n: u32,
	pub value: Fixed8,
	#[serde(default)]
	pub unclaimed: Fixed8,
	pub start_height: u64,
	pub end_height: u64,
}

/// Builds canonical claims; a missing list yields no claims
pub fn assemble_claims(net: &str, address: &str, claimable: Option<Vec<RawClaimable>>) -> Claims {
	let claims = claimable
		.unwrap_or_default()
		.into_iter()
		.map(|claim| ClaimItem {
			transaction_id: claim.txid,
			output_index: claim.n,
			value: claim.value,
			start_height: claim.start_height,
			end_height: claim.end_height,
			unclaimed: claim.unclaimed,
		})
		.collect();

	Claims::new(net, address, claims)
}

/// Reads the unclaimed amount out of an unclaimed response
///
/// A missing or non-numeric `unclaimed` field is a malformed response.
pub fn extract_unclaimed(raw: &Value, operation: &str, address: &str) -> Result<Fixed8, ProviderError> {
	let Some(unclaimed) = raw.get("unclaimed").filter(|value| !value.is_null()) else {
		return Err(ProviderError::malformed_response(
			operation,
			address,
			MALFORMED_ADDRESS_MESSAGE,
			None,
			None,
		));
	};

	Fixed8::from_json(unclaimed).map_err(|e| {
		ProviderError::malformed_response(
			operation,
			address,
			format!("Unreadable unclaimed amount: {}", e),
			Some(Box::new(e)),
			None,
		)
	})
}

/// Reads the explorer height out of a height response
pub fn extract_height(raw: &Value, operation: &str, identifier: &str) -> Result<u64, ProviderError> {
	raw.get("height")
		.and_then(Value::as_u64)
		.ok_or_else(|| {
			ProviderError::malformed_response(
				operation,
				identifier,
				"Height missing from response",
				None,
				None,
			)
		})
}

#[derive(Debug, Deserialize)]
struct RawAbstractEntry {
	#[serde(alias = "transaction_id")]
	txid: String,
	#[serde(deserialize_with = "deserialize_u64_from_number_or_string")]
	time: u64,
	#[serde(alias = "blockHeight")]
	block_height: u64,
	asset: String,
	amount: Fixed8,
	#[serde(alias = "addressTo")]
	address_to: String,
	#[serde(alias = "addressFrom")]
	address_from: String,
}

#[derive(Debug, Deserialize)]
struct RawAddressAbstracts {
	#[serde(alias = "totalPages")]
	total_pages: u32,
	#[serde(alias = "totalEntries")]
	total_entries: u64,
	#[serde(alias = "pageSize")]
	page_size: u32,
	#[serde(alias = "pageNumber")]
	page_number: u32,
	#[serde(default)]
	entries: Vec<RawAbstractEntry>,
}

/// Normalizes an abstracts page; `amount` may be a number or a numeric string
pub fn transform_address_abstracts(
	raw: Value,
	operation: &str,
	address: &str,
) -> Result<AddressAbstracts, ProviderError> {
	if raw.as_object().map(|object| object.is_empty()).unwrap_or(false) {
		return Err(ProviderError::malformed_response(
			operation,
			address,
			EMPTY_ABSTRACTS_MESSAGE,
			None,
			None,
		));
	}

	let page: RawAddressAbstracts = decode_response(raw, operation, address)?;

	Ok(AddressAbstracts {
		total_pages: page.total_pages,
		total_entries: page.total_entries,
		page_size: page.page_size,
		page_number: page.page_number,
		entries: page
			.entries
			.into_iter()
			.map(|entry| AbstractEntry {
				transaction_id: entry.txid,
				time: entry.time,
				block_height: entry.block_height,
				asset: entry.asset,
				amount: entry.amount,
				address_to: entry.address_to,
				address_from: entry.address_from,
			})
			.collect(),
	})
}

/// A value movement of one transaction: an input spent or an output created
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransfer {
	pub value: Fixed8,
	pub asset: String,
	pub address_hash: String,
}

/// The parts of an address-history entry that matter for the net change
#[derive(Debug, Clone, Deserialize)]
pub struct RawHistoryEntry {
	pub txid: String,
	pub block_height: u64,
	#[serde(default)]
	pub vin: Vec<RawTransfer>,
	#[serde(default)]
	pub vouts: Vec<RawTransfer>,
}

/// Computes the net change per asset of each transaction for `address`
///
/// Every entry starts with NEO and GAS at zero; outputs to the address are
/// added and inputs from it subtracted. Claim references are ignored since the
/// claimed amount already shows up as an output. Input order is preserved.
pub fn transform_transaction_history(
	address: &str,
	entries: Vec<RawHistoryEntry>,
) -> Vec<PastTransaction> {
	entries
		.into_iter()
		.map(|entry| {
			let mut change: BTreeMap<String, Fixed8> = BTreeMap::from([
				(NEO_SYMBOL.to_string(), Fixed8::ZERO),
				(GAS_SYMBOL.to_string(), Fixed8::ZERO),
			]);

			for spent in entry.vin.iter().filter(|t| t.address_hash == address) {
				*change.entry(asset_symbol(&spent.asset)).or_default() -= spent.value;
			}
			for received in entry.vouts.iter().filter(|t| t.address_hash == address) {
				*change.entry(asset_symbol(&received.asset)).or_default() += received.value;
			}

			PastTransaction {
				transaction_id: entry.txid,
				block_height: entry.block_height,
				change,
			}
		})
		.collect()
}

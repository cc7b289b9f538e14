//! Neoscan responses to canonical records.

use crate::{
	models::{asset_symbol, Balance, Claims, Transaction, TransactionInput, TransactionOutput},
	services::explorer::clients::{
		common::{assemble_balance, assemble_claims, BalanceEntry},
		neoscan::responses::{
			NeoscanGetBalanceResponse, NeoscanGetClaimableResponse, NeoscanTransaction, NeoscanTxIo,
		},
	},
};

pub fn transform_balance(net: &str, address: &str, response: NeoscanGetBalanceResponse) -> Balance {
	let entries = response
		.balance
		.unwrap_or_default()
		.into_iter()
		.map(|entry| BalanceEntry {
			symbol: entry.asset,
			amount: entry.amount,
			unspent: entry.unspent,
		});

	assemble_balance(net, address, entries)
}

pub fn transform_claims(net: &str, address: &str, response: NeoscanGetClaimableResponse) -> Claims {
	assemble_claims(net, address, response.claimable)
}

fn to_input(io: NeoscanTxIo) -> TransactionInput {
	TransactionInput {
		txid: io.txid,
		vout: io.n,
		asset: Some(asset_symbol(&io.asset)),
		value: Some(io.value),
		address_hash: Some(io.address_hash),
	}
}

pub fn transform_transaction(raw: NeoscanTransaction) -> Transaction {
	Transaction {
		txid: raw.txid,
		size: raw.size,
		tx_type: raw.tx_type,
		version: raw.version,
		attributes: raw.attributes,
		vin: raw.vin.into_iter().map(to_input).collect(),
		vout: raw
			.vouts
			.into_iter()
			.map(|io| TransactionOutput {
				n: io.n,
				asset: asset_symbol(&io.asset),
				value: io.value,
				address_hash: io.address_hash,
			})
			.collect(),
		claims: raw
			.claims
			.unwrap_or_default()
			.into_iter()
			.map(to_input)
			.collect(),
		sys_fee: raw.sys_fee,
		net_fee: raw.net_fee,
		scripts: raw.scripts,
		block_height: raw.block_height,
		time: raw.time,
	}
}

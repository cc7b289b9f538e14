//! Dora responses to canonical records.

use crate::{
	models::{asset_symbol, Balance, Claims, Transaction, TransactionInput, TransactionOutput},
	services::explorer::clients::{
		common::{assemble_balance, assemble_claims, BalanceEntry},
		dora::responses::{DoraGetBalanceResponse, DoraGetClaimableResponse, DoraTransaction, DoraVin},
	},
};

pub fn transform_balance(net: &str, address: &str, response: DoraGetBalanceResponse) -> Balance {
	let entries = response
		.balance
		.unwrap_or_default()
		.into_iter()
		.map(|entry| BalanceEntry {
			symbol: entry.symbol(),
			amount: entry.amount,
			unspent: entry.unspent,
		});

	assemble_balance(net, address, entries)
}

pub fn transform_claims(net: &str, address: &str, response: DoraGetClaimableResponse) -> Claims {
	assemble_claims(net, address, response.claimable)
}

fn to_input(vin: DoraVin) -> TransactionInput {
	TransactionInput {
		txid: vin.txid,
		vout: vin.vout,
		asset: None,
		value: None,
		address_hash: None,
	}
}

pub fn transform_transaction(raw: DoraTransaction) -> Transaction {
	Transaction {
		txid: raw.txid,
		size: raw.size,
		tx_type: raw.tx_type,
		version: raw.version,
		attributes: raw.attributes,
		vin: raw.vin.into_iter().map(to_input).collect(),
		vout: raw
			.vout
			.into_iter()
			.map(|vout| TransactionOutput {
				n: vout.n,
				asset: asset_symbol(&vout.asset),
				value: vout.value,
				address_hash: vout.address,
			})
			.collect(),
		claims: raw.claims.into_iter().map(to_input).collect(),
		sys_fee: raw.sys_fee,
		net_fee: raw.net_fee,
		scripts: raw.scripts,
		block_height: raw.block,
		time: raw.time,
	}
}

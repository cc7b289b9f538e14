use neo_explorer::models::{Fixed8, RpcNode};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};

const MAX_NODES: usize = 20;
const MAX_HEIGHT: u64 = 8;

/// Amounts in whole units of 1e-8, kept well inside `Decimal` range
pub fn fixed8_strategy() -> impl Strategy<Value = Fixed8> {
	(-1_000_000_000_000_000i64..1_000_000_000_000_000i64)
		.prop_map(|units| Fixed8::new(Decimal::new(units, 8)))
}

pub fn non_negative_fixed8_strategy() -> impl Strategy<Value = Fixed8> {
	(0i64..1_000_000_000_000_000i64).prop_map(|units| Fixed8::new(Decimal::new(units, 8)))
}

/// Node URLs mixing schemes, with a narrow height range so ties are common
pub fn node_strategy() -> impl Strategy<Value = RpcNode> {
	(
		prop::sample::select(vec!["http", "https", "ws"]),
		"[a-z]{1,8}",
		1000u16..65535,
		0..MAX_HEIGHT,
	)
		.prop_map(|(scheme, host, port, height)| {
			RpcNode::new(format!("{}://{}.node:{}", scheme, host, port), height)
		})
}

pub fn node_list_strategy() -> impl Strategy<Value = Vec<RpcNode>> {
	prop::collection::vec(node_strategy(), 0..MAX_NODES)
}

/// A value transfer to or from one of a small set of addresses
pub fn transfer_strategy() -> impl Strategy<Value = (String, String, Fixed8)> {
	(
		prop::sample::select(vec!["address", "otherAddress"]),
		prop::sample::select(vec!["NEO", "GAS"]),
		non_negative_fixed8_strategy(),
	)
		.prop_map(|(address, asset, value)| (address.to_string(), asset.to_string(), value))
}

pub fn transfers_to_json(transfers: &[(String, String, Fixed8)]) -> Vec<Value> {
	transfers
		.iter()
		.enumerate()
		.map(|(n, (address, asset, value))| {
			json!({
				"txid": "0",
				"n": n,
				"asset": asset,
				"value": value.to_string(),
				"address_hash": address
			})
		})
		.collect()
}

use crate::properties::strategies::{transfer_strategy, transfers_to_json};

use async_trait::async_trait;
use neo_explorer::{
	models::Fixed8,
	services::explorer::{
		ExplorerTransport, NeoscanClient, ProbingTransport, Provider, TransportError,
	},
};
use proptest::{prelude::*, test_runner::Config};
use serde_json::{json, Value};

/// Transport answering every GET with the same body
#[derive(Clone)]
struct StaticTransport {
	body: Value,
}

#[async_trait]
impl ExplorerTransport for StaticTransport {
	fn base_url(&self) -> String {
		"http://neoscan.test".to_string()
	}

	async fn get_json(&self, _path: &str) -> Result<Value, TransportError> {
		Ok(self.body.clone())
	}
}

#[async_trait]
impl ProbingTransport for StaticTransport {
	async fn try_connect(&self, _url: &str) -> Result<(), anyhow::Error> {
		Ok(())
	}
}

fn net_change(transfers: &[(String, String, Fixed8)], asset: &str) -> Fixed8 {
	transfers
		.iter()
		.filter(|(address, a, _)| address == "address" && a == asset)
		.map(|(_, _, value)| *value)
		.sum()
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_history_change_is_outputs_minus_inputs(
		vin in prop::collection::vec(transfer_strategy(), 0..6),
		vouts in prop::collection::vec(transfer_strategy(), 0..6),
	) {
		let body = json!([{
			"txid": "1",
			"block_height": 7,
			"vin": transfers_to_json(&vin),
			"vouts": transfers_to_json(&vouts),
		}]);
		let client = NeoscanClient::new_with_transport(StaticTransport { body }, "testnet", false);

		let runtime = tokio::runtime::Runtime::new().unwrap();
		let history = runtime
			.block_on(client.get_transaction_history("address"))
			.unwrap();

		prop_assert_eq!(history.len(), 1);
		let change = &history[0].change;
		prop_assert_eq!(change.len(), 2);
		for asset in ["NEO", "GAS"] {
			prop_assert_eq!(
				change[asset],
				net_change(&vouts, asset) - net_change(&vin, asset)
			);
		}
	}

	#[test]
	fn test_history_preserves_entry_order(heights in prop::collection::vec(0u64..1000, 0..10)) {
		let entries: Vec<Value> = heights
			.iter()
			.enumerate()
			.map(|(i, height)| json!({ "txid": i.to_string(), "block_height": height }))
			.collect();
		let client = NeoscanClient::new_with_transport(
			StaticTransport { body: Value::Array(entries) },
			"testnet",
			false,
		);

		let runtime = tokio::runtime::Runtime::new().unwrap();
		let history = runtime
			.block_on(client.get_transaction_history("address"))
			.unwrap();

		prop_assert_eq!(history.len(), heights.len());
		for (i, (entry, height)) in history.iter().zip(&heights).enumerate() {
			prop_assert_eq!(&entry.transaction_id, &i.to_string());
			prop_assert_eq!(entry.block_height, *height);
			prop_assert!(entry.change.values().all(Fixed8::is_zero));
		}
	}
}

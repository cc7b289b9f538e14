//! Both backends must produce identical canonical records for equivalent data.

use neo_explorer::services::explorer::{DoraClient, NeoscanClient, Provider};
use serde_json::json;

use crate::integration::mocks::{
	address_abstracts_body, claimable_body, dora_balance_body, mock_transport_with_response,
	neoscan_balance_body, MockExplorerTransportClient,
};

const NET: &str = "testnet";

fn neoscan(transport: MockExplorerTransportClient) -> NeoscanClient<MockExplorerTransportClient> {
	NeoscanClient::new_with_transport(transport, NET, false)
}

fn dora(transport: MockExplorerTransportClient) -> DoraClient<MockExplorerTransportClient> {
	DoraClient::new_with_transport(transport, NET, false)
}

#[tokio::test]
async fn test_balance_equivalence() {
	let from_neoscan = neoscan(mock_transport_with_response(
		"https://neoscan.test",
		"/v1/get_balance/address",
		neoscan_balance_body(),
	))
	.get_balance("address")
	.await
	.unwrap();

	let from_dora = dora(mock_transport_with_response(
		"https://dora.test",
		"/get_balance/address",
		dora_balance_body(),
	))
	.get_balance("address")
	.await
	.unwrap();

	assert_eq!(from_neoscan, from_dora);
	assert_eq!(
		serde_json::to_string(&from_neoscan).unwrap(),
		serde_json::to_string(&from_dora).unwrap()
	);
}

#[tokio::test]
async fn test_claims_equivalence() {
	let from_neoscan = neoscan(mock_transport_with_response(
		"https://neoscan.test",
		"/v1/get_claimable/address",
		claimable_body(),
	))
	.get_claims("address")
	.await
	.unwrap();

	let from_dora = dora(mock_transport_with_response(
		"https://dora.test",
		"/get_claimable/address",
		claimable_body(),
	))
	.get_claims("address")
	.await
	.unwrap();

	assert_eq!(from_neoscan, from_dora);
	assert_eq!(
		serde_json::to_value(&from_neoscan).unwrap(),
		serde_json::to_value(&from_dora).unwrap()
	);
}

#[tokio::test]
async fn test_unclaimed_equivalence() {
	let from_neoscan = neoscan(mock_transport_with_response(
		"https://neoscan.test",
		"/v1/get_unclaimed/address",
		json!({ "unclaimed": "0.00035", "address": "address" }),
	))
	.get_max_claim_amount("address")
	.await
	.unwrap();

	let from_dora = dora(mock_transport_with_response(
		"https://dora.test",
		"/get_unclaimed/address",
		json!({ "available": 0.0003, "unavailable": 0.00005, "unclaimed": 0.00035 }),
	))
	.get_max_claim_amount("address")
	.await
	.unwrap();

	assert_eq!(from_neoscan, from_dora);
}

#[tokio::test]
async fn test_abstracts_equivalence() {
	let from_neoscan = neoscan(mock_transport_with_response(
		"https://neoscan.test",
		"/v1/get_address_abstracts/address/1",
		address_abstracts_body(json!("12.5")),
	))
	.get_address_abstracts("address", 1)
	.await
	.unwrap();

	let from_dora = dora(mock_transport_with_response(
		"https://dora.test",
		"/get_address_abstracts/address/1",
		address_abstracts_body(json!(12.5)),
	))
	.get_address_abstracts("address", 1)
	.await
	.unwrap();

	assert_eq!(from_neoscan, from_dora);
}

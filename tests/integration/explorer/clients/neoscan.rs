use mockito::{Matcher, Server};
use neo_explorer::{
	models::{Fixed8, PastTransaction},
	services::explorer::{
		HttpTransportClient, NeoscanClient, Provider, ProviderError, TransportError,
	},
	utils::HttpClientConfig,
};
use serde_json::json;
use std::collections::BTreeMap;

use crate::integration::mocks::{
	address_abstracts_body, claimable_body, create_explorer_json_mock, create_node_list_mock,
	create_node_server_mock, mock_transport_with_response, neoscan_balance_body,
	neoscan_history_body, MockExplorerTransportClient,
};

const BASE_URL: &str = "http://testurl.com";

fn fixed(s: &str) -> Fixed8 {
	s.parse().unwrap()
}

fn client(transport: MockExplorerTransportClient) -> NeoscanClient<MockExplorerTransportClient> {
	NeoscanClient::new_with_transport(transport, "UnitTestNet", false)
}

#[tokio::test]
async fn test_name() {
	let mut transport = MockExplorerTransportClient::new();
	transport
		.expect_base_url()
		.returning(|| BASE_URL.to_string());

	assert_eq!(client(transport).name(), "Neoscan[http://testurl.com]");
}

#[tokio::test]
async fn test_get_balance() {
	let transport =
		mock_transport_with_response(BASE_URL, "/v1/get_balance/address", neoscan_balance_body());

	let balance = client(transport).get_balance("address").await.unwrap();

	assert_eq!(balance.net, "UnitTestNet");
	assert_eq!(balance.address, "address");
	assert_eq!(balance.asset_symbols(), vec!["GAS", "NEO"]);
	assert_eq!(balance.tokens, BTreeMap::from([("TEST".to_string(), fixed("100"))]));
	assert_eq!(balance.assets["NEO"].balance, fixed("2"));
	assert_eq!(balance.assets["NEO"].unspent[0].index, 1);
	assert_eq!(balance.assets["GAS"].unspent[0].value, fixed("5"));
}

#[tokio::test]
async fn test_get_balance_empty() {
	let transport = mock_transport_with_response(
		BASE_URL,
		"/v1/get_balance/address",
		json!({ "balance": null, "address": "not found" }),
	);

	let balance = client(transport).get_balance("address").await.unwrap();

	assert!(balance.is_empty());
	assert_eq!(balance.address, "address");
	assert_eq!(balance.net, "UnitTestNet");
}

#[tokio::test]
async fn test_get_balance_malformed() {
	let transport = mock_transport_with_response(
		BASE_URL,
		"/v1/get_balance/address",
		json!({ "balance": [] }),
	);

	match client(transport).get_balance("address").await {
		Err(ProviderError::MalformedResponse {
			operation,
			identifier,
			..
		}) => {
			assert_eq!(operation, "get_balance");
			assert_eq!(identifier, "address");
		}
		other => panic!("Expected MalformedResponse, got {:?}", other),
	}
}

#[tokio::test]
async fn test_get_balance_encodes_address() {
	let transport = mock_transport_with_response(
		BASE_URL,
		"/v1/get_balance/bad%2Faddress",
		json!({ "balance": null, "address": "bad/address" }),
	);

	let balance = client(transport).get_balance("bad/address").await.unwrap();
	assert_eq!(balance.address, "bad/address");
}

#[tokio::test]
async fn test_get_claims() {
	let transport =
		mock_transport_with_response(BASE_URL, "/v1/get_claimable/address", claimable_body());

	let claims = client(transport).get_claims("address").await.unwrap();

	assert_eq!(claims.net, "UnitTestNet");
	assert_eq!(claims.claims.len(), 1);
	assert_eq!(claims.claims[0].transaction_id, "1");
	assert_eq!(claims.claims[0].output_index, 2);
	assert_eq!(claims.claims[0].value, fixed("10"));
	assert_eq!(claims.claims[0].start_height, 5);
	assert_eq!(claims.claims[0].end_height, 11);
	assert_eq!(claims.total_unclaimed(), fixed("1"));
}

#[tokio::test]
async fn test_get_claims_empty() {
	let transport = mock_transport_with_response(
		BASE_URL,
		"/v1/get_claimable/address",
		json!({ "unclaimed": 0, "claimable": [], "address": "address" }),
	);

	let claims = client(transport).get_claims("address").await.unwrap();
	assert!(claims.claims.is_empty());
}

#[tokio::test]
async fn test_get_max_claim_amount() {
	let transport = mock_transport_with_response(
		BASE_URL,
		"/v1/get_unclaimed/address",
		json!({ "unclaimed": 1.28, "address": "address" }),
	);

	let amount = client(transport)
		.get_max_claim_amount("address")
		.await
		.unwrap();
	assert_eq!(amount, fixed("1.28"));
}

#[tokio::test]
async fn test_get_max_claim_amount_missing_field() {
	let transport = mock_transport_with_response(
		BASE_URL,
		"/v1/get_unclaimed/address",
		json!({ "address": "address" }),
	);

	let result = client(transport).get_max_claim_amount("address").await;
	assert!(matches!(
		result,
		Err(ProviderError::MalformedResponse { .. })
	));
}

#[tokio::test]
async fn test_get_height() {
	let transport =
		mock_transport_with_response(BASE_URL, "/v1/get_height", json!({ "height": 123 }));

	assert_eq!(client(transport).get_height().await.unwrap(), 123);
}

#[tokio::test]
async fn test_get_transaction_history() {
	let transport = mock_transport_with_response(
		BASE_URL,
		"/v1/get_last_transactions_by_address/address",
		neoscan_history_body(),
	);

	let history = client(transport)
		.get_transaction_history("address")
		.await
		.unwrap();

	let expected = vec![
		PastTransaction {
			transaction_id: "1".to_string(),
			block_height: 11,
			change: BTreeMap::from([
				("GAS".to_string(), fixed("0.123")),
				("NEO".to_string(), fixed("5")),
			]),
		},
		PastTransaction {
			transaction_id: "2".to_string(),
			block_height: 12,
			change: BTreeMap::from([
				("GAS".to_string(), fixed("-0.456")),
				("NEO".to_string(), fixed("-6")),
			]),
		},
		PastTransaction {
			transaction_id: "3".to_string(),
			block_height: 13,
			change: BTreeMap::from([
				("GAS".to_string(), fixed("0.789")),
				("NEO".to_string(), Fixed8::ZERO),
			]),
		},
	];
	assert_eq!(history, expected);
}

#[tokio::test]
async fn test_get_transaction() {
	let transport = mock_transport_with_response(
		BASE_URL,
		"/v1/get_transaction/txid",
		json!({
			"asset": null,
			"attributes": [],
			"block_hash": "75c26527eae879fdd14c3f146cbb92a024c6570122acd56a5d604d5558573392",
			"block_height": 6441685,
			"claims": [],
			"contract": null,
			"description": null,
			"net_fee": 0,
			"nonce": null,
			"pubkey": null,
			"scripts": [{
				"invocation": "40f9f59a4f5ddc6b4a77a6bee0155dd16a39b9fda73e06eb4a75ec0c1407da00c9069d2c3aa9e71820ccc2e686fb423ff3aa167f005de9dea8c3a3e140187a49ec",
				"verification": "210217abc7fa5db7f6ebbd07f6c1e6359dda67d7f2da30571a8cb9c1f7c805680ccdac"
			}],
			"size": 202,
			"sys_fee": 0,
			"time": 1604948913,
			"txid": "12d2c0ebf96c54d3dea7403f713bc17bffc677dc36c0c23fb11903233a1fd002",
			"type": "ContractTransaction",
			"version": 0,
			"vin": [{
				"address_hash": "AeGgZTTWPzyVtNiQRcpngkV75Xip1hznmi",
				"asset": "NEO",
				"n": 0,
				"txid": "74c9cc905184386525563f3895165c57740da1b0f3e059f416ce86646256c29c",
				"value": 1
			}],
			"vouts": [{
				"address_hash": "AeGgZTTWPzyVtNiQRcpngkV75Xip1hznmi",
				"asset": "NEO",
				"n": 0,
				"txid": "12d2c0ebf96c54d3dea7403f713bc17bffc677dc36c0c23fb11903233a1fd002",
				"value": 1
			}]
		}),
	);

	let tx = client(transport).get_transaction("txid").await.unwrap();

	assert_eq!(
		tx.txid,
		"12d2c0ebf96c54d3dea7403f713bc17bffc677dc36c0c23fb11903233a1fd002"
	);
	assert_eq!(tx.size, 202);
	assert_eq!(tx.block_height, 6441685);
	assert_eq!(tx.time, 1604948913);
	assert_eq!(tx.vin.len(), 1);
	assert_eq!(tx.vout.len(), 1);
	assert_eq!(tx.vout[0].address_hash, "AeGgZTTWPzyVtNiQRcpngkV75Xip1hznmi");
	assert_eq!(tx.scripts.len(), 1);
}

#[tokio::test]
async fn test_get_address_abstracts() {
	let transport = mock_transport_with_response(
		BASE_URL,
		"/v1/get_address_abstracts/address/1",
		address_abstracts_body(json!("0")),
	);

	let abstracts = client(transport)
		.get_address_abstracts("address", 1)
		.await
		.unwrap();

	assert_eq!(abstracts.total_pages, 34);
	assert_eq!(abstracts.total_entries, 503);
	assert_eq!(abstracts.page_size, 15);
	assert_eq!(abstracts.page_number, 24);
	assert_eq!(abstracts.entries.len(), 1);
	assert_eq!(abstracts.entries[0].amount, Fixed8::ZERO);
	assert_eq!(abstracts.entries[0].address_to, "AeGgZTTWPzyVtNiQRcpngkV75Xip1hznmi");
}

#[tokio::test]
async fn test_get_address_abstracts_empty_response() {
	let transport = mock_transport_with_response(
		BASE_URL,
		"/v1/get_address_abstracts/address/1",
		json!({}),
	);

	let error = client(transport)
		.get_address_abstracts("address", 1)
		.await
		.unwrap_err();
	assert!(error.to_string().contains("Empty Response. Address may not exist"));
}

#[tokio::test]
async fn test_transport_errors_pass_through() {
	let mut transport = MockExplorerTransportClient::new();
	transport
		.expect_base_url()
		.returning(|| BASE_URL.to_string());
	transport.expect_get_json().times(1).returning(|_| {
		Err(TransportError::http(
			reqwest::StatusCode::INTERNAL_SERVER_ERROR,
			format!("{}/v1/get_height", BASE_URL),
			String::new(),
			None,
			None,
		))
	});

	let error = client(transport).get_height().await.unwrap_err();

	assert!(matches!(
		error,
		ProviderError::Transport(TransportError::Http { .. })
	));
}

#[tokio::test]
async fn test_end_to_end_over_http() {
	let mut explorer = Server::new_async().await;
	let mut node = Server::new_async().await;

	let node_mock = create_node_server_mock(&mut node, 200);
	let nodes_mock = create_node_list_mock(
		&mut explorer,
		&json!([{ "height": 42, "url": node.url() }]),
	);
	let balance_mock =
		create_explorer_json_mock(&mut explorer, "/v1/get_balance/address", &neoscan_balance_body());

	let transport = HttpTransportClient::new(&explorer.url(), &HttpClientConfig::default()).unwrap();
	let client = NeoscanClient::new_with_transport(transport, "UnitTestNet", false);

	assert_eq!(client.get_rpc_endpoint().await.unwrap(), node.url());
	assert_eq!(
		client.get_balance("address").await.unwrap().token_symbols(),
		vec!["TEST"]
	);

	node_mock.assert();
	nodes_mock.assert();
	balance_mock.assert();
}

#[tokio::test]
async fn test_large_amounts_keep_every_digit_over_http() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/v1/get_unclaimed/address")
		.with_header("content-type", "application/json")
		.with_status(200)
		.with_body(r#"{"unclaimed": 1000000000.12345678, "address": "address"}"#)
		.create_async()
		.await;

	let transport = HttpTransportClient::new(&server.url(), &HttpClientConfig::default()).unwrap();
	let client = NeoscanClient::new_with_transport(transport, "UnitTestNet", false);

	let amount = client.get_max_claim_amount("address").await.unwrap();

	assert_eq!(amount, fixed("1000000000.12345678"));
	mock.assert();
}

#[tokio::test]
async fn test_dot_segment_address_is_not_sent() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", Matcher::Any)
		.expect(0)
		.create_async()
		.await;

	let transport = HttpTransportClient::new(&server.url(), &HttpClientConfig::default()).unwrap();
	let client = NeoscanClient::new_with_transport(transport, "UnitTestNet", false);

	for address in ["..", "."] {
		let error = client.get_balance(address).await.unwrap_err();
		assert!(matches!(
			error,
			ProviderError::Transport(TransportError::InvalidUrl(_))
		));
	}
	mock.assert();
}

use mockito::{Matcher, Server};
use neo_explorer::{
	services::explorer::{
		probe_payload, ExplorerTransport, HttpTransportClient, ProbingTransport, TransportError,
	},
	utils::{tests::create_test_http_client, HttpClientConfig},
};
use serde_json::json;

use crate::integration::mocks::{create_explorer_json_mock, create_node_server_mock};

#[tokio::test]
async fn test_get_json_success() {
	let mut server = Server::new_async().await;
	let mock = create_explorer_json_mock(&mut server, "/v1/get_height", &json!({"height": 850}));

	let transport = HttpTransportClient::new(&server.url(), &HttpClientConfig::default()).unwrap();
	let response = transport.get_json("/v1/get_height").await.unwrap();

	assert_eq!(response, json!({"height": 850}));
	mock.assert();
}

#[tokio::test]
async fn test_get_json_keeps_base_path() {
	let mut server = Server::new_async().await;
	let mock = create_explorer_json_mock(
		&mut server,
		"/api/main_net/v1/get_balance/address",
		&json!({"address": "address", "balance": null}),
	);

	let base_url = format!("{}/api/main_net/", server.url());
	let transport = HttpTransportClient::with_client(&base_url, create_test_http_client()).unwrap();

	assert_eq!(transport.base_url(), format!("{}/api/main_net", server.url()));
	let response = transport
		.get_json("/v1/get_balance/address")
		.await
		.unwrap();

	assert_eq!(response["address"], "address");
	mock.assert();
}

#[tokio::test]
async fn test_get_json_http_error_is_not_retried() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/height")
		.with_status(502)
		.with_body("Bad gateway")
		.expect(1)
		.create_async()
		.await;

	let transport = HttpTransportClient::new(&server.url(), &HttpClientConfig::default()).unwrap();
	let error = transport.get_json("/height").await.unwrap_err();

	match error {
		TransportError::Http {
			status_code, body, ..
		} => {
			assert_eq!(status_code, reqwest::StatusCode::BAD_GATEWAY);
			assert_eq!(body, "Bad gateway");
		}
		other => panic!("Expected Http error, got {:?}", other),
	}
	mock.assert();
}

#[tokio::test]
async fn test_get_json_invalid_body() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/height")
		.with_status(200)
		.with_body("<html>not json</html>")
		.create_async()
		.await;

	let transport = HttpTransportClient::new(&server.url(), &HttpClientConfig::default()).unwrap();
	let error = transport.get_json("/height").await.unwrap_err();

	assert!(matches!(error, TransportError::ResponseParse(_)));
	mock.assert();
}

#[tokio::test]
async fn test_get_json_network_error() {
	// Bind then release a port so nothing is listening on it
	let port = std::net::TcpListener::bind("127.0.0.1:0")
		.unwrap()
		.local_addr()
		.unwrap()
		.port();
	let url = format!("http://127.0.0.1:{}", port);

	let transport = HttpTransportClient::new(&url, &HttpClientConfig::default()).unwrap();
	let error = transport.get_json("/height").await.unwrap_err();

	assert!(matches!(error, TransportError::Network(_)));
}

#[tokio::test]
async fn test_try_connect_sends_probe() {
	let mut node = Server::new_async().await;
	let mock = create_node_server_mock(&mut node, 200);

	let transport =
		HttpTransportClient::new("https://explorer.test", &HttpClientConfig::default()).unwrap();

	assert!(transport.try_connect(&node.url()).await.is_ok());
	mock.assert();
}

#[tokio::test]
async fn test_try_connect_rejects_error_status() {
	let mut node = Server::new_async().await;
	let mock = node
		.mock("POST", "/")
		.match_body(Matcher::Json(probe_payload()))
		.with_status(500)
		.create_async()
		.await;

	let transport =
		HttpTransportClient::new("https://explorer.test", &HttpClientConfig::default()).unwrap();

	let error = transport.try_connect(&node.url()).await.unwrap_err();
	assert!(error.to_string().contains("500"));
	mock.assert();
}

//! HTTP transport for explorer REST APIs.
//!
//! A thin wrapper around a shared `reqwest_middleware` client that knows the
//! explorer base URL. Requests are never retried: any failure is reported to the
//! caller as a [`TransportError`].

use anyhow::Context;
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

use crate::{
	services::explorer::transports::{
		probe_payload, ExplorerTransport, ProbingTransport, TransportError,
	},
	utils::http::{create_http_client, HttpClientConfig},
};

/// HTTP transport bound to a single explorer base URL
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// HTTP client used for explorer calls and node probes
	pub client: ClientWithMiddleware,
	/// Explorer base URL without a trailing slash
	base_url: String,
}

impl HttpTransportClient {
	/// Creates a transport for the explorer at `base_url`
	///
	/// # Arguments
	/// * `base_url` - Absolute http(s) URL of the explorer API root
	/// * `config` - Timeouts and pooling settings for the HTTP client
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - New transport or a URL/client construction error
	pub fn new(base_url: &str, config: &HttpClientConfig) -> Result<Self, anyhow::Error> {
		let client = create_http_client(config).context("Failed to create HTTP client")?;
		Self::with_client(base_url, client)
	}

	/// Creates a transport that reuses an existing client
	pub fn with_client(base_url: &str, client: ClientWithMiddleware) -> Result<Self, anyhow::Error> {
		let parsed = Url::parse(base_url)
			.with_context(|| format!("Invalid explorer URL: {}", base_url))?;

		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(anyhow::anyhow!(
				"Explorer URL must use http or https: {}",
				base_url
			));
		}

		Ok(Self {
			client,
			base_url: base_url.trim_end_matches('/').to_string(),
		})
	}

	/// Joins `path` onto the base URL
	///
	/// Dot segments are rejected: URL parsing would resolve them and send the
	/// request to a different endpoint than the one named by `path`.
	fn url_for(&self, path: &str) -> Result<Url, TransportError> {
		let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

		if path.split('/').any(is_dot_segment) {
			return Err(TransportError::invalid_url(
				format!("Request path contains a dot segment: {}", path),
				None,
				Some(HashMap::from([("url".to_string(), raw)])),
			));
		}

		Url::parse(&raw).map_err(|e| {
			TransportError::invalid_url(
				format!("Failed to build request URL: {}", e),
				Some(Box::new(e)),
				Some(HashMap::from([("url".to_string(), raw.clone())])),
			)
		})
	}
}

fn is_dot_segment(segment: &str) -> bool {
	matches!(
		segment.to_ascii_lowercase().as_str(),
		"." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
	)
}

#[async_trait]
impl ExplorerTransport for HttpTransportClient {
	fn base_url(&self) -> String {
		self.base_url.clone()
	}

	/// Sends a GET request to the explorer and decodes the JSON body
	///
	/// # Arguments
	/// * `path` - Request path relative to the base URL (e.g. `/v1/get_height`)
	///
	/// # Returns
	/// * `Result<Value, TransportError>` - Decoded body, or the failure with its context
	async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
		let url = self.url_for(path)?;
		tracing::debug!(url = %url, "explorer request");

		let response = self.client.get(url.clone()).send().await.map_err(|e| {
			TransportError::network(
				format!("Failed to send request: {}", e),
				Some(Box::new(e)),
				Some(HashMap::from([("url".to_string(), url.to_string())])),
			)
		})?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(TransportError::http(
				status,
				url.to_string(),
				body,
				None,
				None,
			));
		}

		response.json::<Value>().await.map_err(|e| {
			TransportError::response_parse(
				format!("Failed to parse response: {}", e),
				Some(Box::new(e)),
				Some(HashMap::from([("url".to_string(), url.to_string())])),
			)
		})
	}
}

#[async_trait]
impl ProbingTransport for HttpTransportClient {
	/// Tests connectivity to a candidate RPC node
	///
	/// # Arguments
	/// * `url` - The node URL to probe
	///
	/// # Returns
	/// * `Result<(), anyhow::Error>` - Success, or why the node is considered dead
	async fn try_connect(&self, url: &str) -> Result<(), anyhow::Error> {
		let url = Url::parse(url).map_err(|_| anyhow::anyhow!("Invalid URL: {}", url))?;

		let request = self.client.post(url.clone()).json(&probe_payload());

		match request.send().await {
			Ok(response) => {
				let status = response.status();
				if !status.is_success() {
					Err(anyhow::anyhow!(
						"Failed to connect to {}: {}",
						url,
						status.as_u16()
					))
				} else {
					Ok(())
				}
			}
			Err(e) => Err(anyhow::anyhow!("Failed to connect to {}: {}", url, e)),
		}
	}
}

//! Dora explorer client.
//!
//! Dora serves unversioned paths and has no address history endpoint, so
//! `get_transaction_history` keeps the `NotImplemented` default.

use async_trait::async_trait;
use tracing::instrument;

use crate::{
	models::{AddressAbstracts, Balance, Claims, ExplorerType, Fixed8, Network, Transaction},
	services::explorer::{
		clients::{
			common::{
				decode_response, extract_height, extract_unclaimed, require_address,
				transform_address_abstracts,
			},
			dora::{
				responses::{DoraGetBalanceResponse, DoraGetClaimableResponse, DoraTransaction},
				transform::{transform_balance, transform_claims, transform_transaction},
			},
		},
		nodes::resolve_rpc_endpoint,
		provider::Provider,
		transports::{HttpTransportClient, ProbingTransport},
		ProviderError,
	},
	utils::http::HttpClientConfig,
};

/// Client for a Dora explorer
#[derive(Clone, Debug)]
pub struct DoraClient<T> {
	transport: T,
	/// Network the canonical records are tagged with
	net: String,
	/// Only select https RPC nodes
	https_only: bool,
}

impl<T: ProbingTransport> DoraClient<T> {
	/// Creates a new Dora client with a specific transport
	pub fn new_with_transport(transport: T, net: impl Into<String>, https_only: bool) -> Self {
		Self {
			transport,
			net: net.into(),
			https_only,
		}
	}

	async fn get(&self, path: String) -> Result<serde_json::Value, ProviderError> {
		Ok(self.transport.get_json(&path).await?)
	}
}

impl DoraClient<HttpTransportClient> {
	/// Creates a Dora client for the network's configured Dora URL
	///
	/// # Errors
	/// Fails if the network has no Dora URL or the URL is invalid.
	pub fn new(network: &Network, config: &HttpClientConfig) -> Result<Self, anyhow::Error> {
		let url = network
			.explorer_url(ExplorerType::Dora)
			.ok_or_else(|| anyhow::anyhow!("Network '{}' has no dora URL", network.slug))?;
		let transport = HttpTransportClient::new(url, config)?;
		Ok(Self::new_with_transport(
			transport,
			&network.slug,
			network.https_only,
		))
	}
}

fn encode(segment: &str) -> String {
	urlencoding::encode(segment).into_owned()
}

#[async_trait]
impl<T: ProbingTransport> Provider for DoraClient<T> {
	fn name(&self) -> String {
		format!("Dora[{}]", self.transport.base_url())
	}

	#[instrument(skip(self))]
	async fn get_rpc_endpoint(&self) -> Result<String, ProviderError> {
		let url = resolve_rpc_endpoint(&self.transport, self.https_only).await?;
		tracing::info!("Found best RPC endpoint {}", url);
		Ok(url)
	}

	#[instrument(skip(self))]
	async fn get_balance(&self, address: &str) -> Result<Balance, ProviderError> {
		let raw = self.get(format!("/get_balance/{}", encode(address))).await?;
		let response: DoraGetBalanceResponse = decode_response(raw, "get_balance", address)?;
		require_address(response.address.as_deref(), "get_balance", address)?;

		let balance = transform_balance(&self.net, address, response);
		tracing::info!("Retrieved balance for {} from {}", address, self.name());
		Ok(balance)
	}

	#[instrument(skip(self))]
	async fn get_claims(&self, address: &str) -> Result<Claims, ProviderError> {
		let raw = self.get(format!("/get_claimable/{}", encode(address))).await?;
		let response: DoraGetClaimableResponse = decode_response(raw, "get_claims", address)?;
		require_address(response.address.as_deref(), "get_claims", address)?;

		let claims = transform_claims(&self.net, address, response);
		tracing::info!("Retrieved claims for {} from {}", address, self.name());
		Ok(claims)
	}

	#[instrument(skip(self))]
	async fn get_max_claim_amount(&self, address: &str) -> Result<Fixed8, ProviderError> {
		let raw = self.get(format!("/get_unclaimed/{}", encode(address))).await?;

		let amount = extract_unclaimed(&raw, "get_max_claim_amount", address)?;
		tracing::info!(
			"Retrieved maximum amount of gas claimable after spending all NEO for {} from {}",
			address,
			self.name()
		);
		Ok(amount)
	}

	#[instrument(skip(self))]
	async fn get_height(&self) -> Result<u64, ProviderError> {
		let raw = self.get("/height".to_string()).await?;
		extract_height(&raw, "get_height", &self.transport.base_url())
	}

	#[instrument(skip(self))]
	async fn get_transaction(&self, txid: &str) -> Result<Transaction, ProviderError> {
		let raw = self.get(format!("/transaction/{}", encode(txid))).await?;
		let response: DoraTransaction = decode_response(raw, "get_transaction", txid)?;

		let transaction = transform_transaction(response);
		tracing::info!("Retrieved transaction {} from {}", txid, self.name());
		Ok(transaction)
	}

	#[instrument(skip(self))]
	async fn get_address_abstracts(
		&self,
		address: &str,
		page: u32,
	) -> Result<AddressAbstracts, ProviderError> {
		let raw = self
			.get(format!(
				"/get_address_abstracts/{}/{}",
				encode(address),
				page
			))
			.await?;

		let abstracts = transform_address_abstracts(raw, "get_address_abstracts", address)?;
		tracing::info!("Retrieved Address Abstracts for {} from {}", address, self.name());
		Ok(abstracts)
	}
}

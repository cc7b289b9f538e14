//! Neoscan explorer client.
//!
//! Talks to the versioned `/v1` REST API. This is the only backend with an
//! address history endpoint.

use async_trait::async_trait;
use tracing::instrument;

use crate::{
	models::{AddressAbstracts, Balance, Claims, ExplorerType, Fixed8, Network, PastTransaction, Transaction},
	services::explorer::{
		clients::{
			common::{
				decode_response, extract_height, extract_unclaimed, require_address,
				transform_address_abstracts, transform_transaction_history, RawHistoryEntry,
			},
			neoscan::{
				responses::{NeoscanGetBalanceResponse, NeoscanGetClaimableResponse, NeoscanTransaction},
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

/// Client for a Neoscan explorer
#[derive(Clone, Debug)]
pub struct NeoscanClient<T> {
	transport: T,
	/// Network the canonical records are tagged with
	net: String,
	/// Only select https RPC nodes
	https_only: bool,
}

impl<T: ProbingTransport> NeoscanClient<T> {
	/// Creates a new Neoscan client with a specific transport
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

impl NeoscanClient<HttpTransportClient> {
	/// Creates a Neoscan client for the network's configured Neoscan URL
	///
	/// # Errors
	/// Fails if the network has no Neoscan URL or the URL is invalid.
	pub fn new(network: &Network, config: &HttpClientConfig) -> Result<Self, anyhow::Error> {
		let url = network
			.explorer_url(ExplorerType::Neoscan)
			.ok_or_else(|| anyhow::anyhow!("Network '{}' has no neoscan URL", network.slug))?;
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
impl<T: ProbingTransport> Provider for NeoscanClient<T> {
	fn name(&self) -> String {
		format!("Neoscan[{}]", self.transport.base_url())
	}

	#[instrument(skip(self))]
	async fn get_rpc_endpoint(&self) -> Result<String, ProviderError> {
		let url = resolve_rpc_endpoint(&self.transport, self.https_only).await?;
		tracing::info!("Found best RPC endpoint {}", url);
		Ok(url)
	}

	#[instrument(skip(self))]
	async fn get_balance(&self, address: &str) -> Result<Balance, ProviderError> {
		let raw = self
			.get(format!("/v1/get_balance/{}", encode(address)))
			.await?;
		let response: NeoscanGetBalanceResponse = decode_response(raw, "get_balance", address)?;
		require_address(response.address.as_deref(), "get_balance", address)?;

		let balance = transform_balance(&self.net, address, response);
		tracing::info!("Retrieved balance for {} from {}", address, self.name());
		Ok(balance)
	}

	#[instrument(skip(self))]
	async fn get_claims(&self, address: &str) -> Result<Claims, ProviderError> {
		let raw = self
			.get(format!("/v1/get_claimable/{}", encode(address)))
			.await?;
		let response: NeoscanGetClaimableResponse = decode_response(raw, "get_claims", address)?;
		require_address(response.address.as_deref(), "get_claims", address)?;

		let claims = transform_claims(&self.net, address, response);
		tracing::info!("Retrieved claims for {} from {}", address, self.name());
		Ok(claims)
	}

	#[instrument(skip(self))]
	async fn get_max_claim_amount(&self, address: &str) -> Result<Fixed8, ProviderError> {
		let raw = self
			.get(format!("/v1/get_unclaimed/{}", encode(address)))
			.await?;
		require_address(
			raw.get("address").and_then(|a| a.as_str()),
			"get_max_claim_amount",
			address,
		)?;

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
		let raw = self.get("/v1/get_height".to_string()).await?;
		extract_height(&raw, "get_height", &self.transport.base_url())
	}

	#[instrument(skip(self))]
	async fn get_transaction(&self, txid: &str) -> Result<Transaction, ProviderError> {
		let raw = self
			.get(format!("/v1/get_transaction/{}", encode(txid)))
			.await?;
		let response: NeoscanTransaction = decode_response(raw, "get_transaction", txid)?;

		let transaction = transform_transaction(response);
		tracing::info!("Retrieved transaction {} from {}", txid, self.name());
		Ok(transaction)
	}

	#[instrument(skip(self))]
	async fn get_transaction_history(
		&self,
		address: &str,
	) -> Result<Vec<PastTransaction>, ProviderError> {
		let raw = self
			.get(format!(
				"/v1/get_last_transactions_by_address/{}",
				encode(address)
			))
			.await?;
		let entries: Vec<RawHistoryEntry> =
			decode_response(raw, "get_transaction_history", address)?;

		let history = transform_transaction_history(address, entries);
		tracing::info!(
			"Retrieved {} history entries for {} from {}",
			history.len(),
			address,
			self.name()
		);
		Ok(history)
	}

	#[instrument(skip(self))]
	async fn get_address_abstracts(
		&self,
		address: &str,
		page: u32,
	) -> Result<AddressAbstracts, ProviderError> {
		let raw = self
			.get(format!(
				"/v1/get_address_abstracts/{}/{}",
				encode(address),
				page
			))
			.await?;

		let abstracts = transform_address_abstracts(raw, "get_address_abstracts", address)?;
		tracing::info!("Retrieved Address Abstracts for {} from {}", address, self.name());
		Ok(abstracts)
	}
}

//! Provider selection by backend type.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::{
	models::{
		AddressAbstracts, Balance, Claims, ConfigError, ExplorerType, Fixed8, Network,
		PastTransaction, Transaction,
	},
	services::explorer::{
		transports::HttpTransportClient, DoraClient, NeoscanClient, Provider, ProviderError,
	},
	utils::http::HttpClientConfig,
};

/// A provider for one of the supported explorer backends
#[derive(Clone, Debug)]
pub enum ExplorerProvider {
	Neoscan(NeoscanClient<HttpTransportClient>),
	Dora(DoraClient<HttpTransportClient>),
}

impl ExplorerProvider {
	/// Builds the provider of type `explorer` for `network`
	///
	/// # Errors
	/// A `ValidationError` if the network has no URL for that explorer, or the
	/// client construction error otherwise.
	pub fn from_network(
		network: &Network,
		explorer: ExplorerType,
		config: &HttpClientConfig,
	) -> Result<Self, ConfigError> {
		if network.explorer_url(explorer).is_none() {
			return Err(ConfigError::validation_error(
				format!("Network '{}' has no {} explorer configured", network.slug, explorer),
				None,
				Some(HashMap::from([
					("network_slug".to_string(), network.slug.clone()),
					("explorer".to_string(), explorer.to_string()),
				])),
			));
		}

		let provider = match explorer {
			ExplorerType::Neoscan => Self::Neoscan(NeoscanClient::new(network, config)?),
			ExplorerType::Dora => Self::Dora(DoraClient::new(network, config)?),
		};
		tracing::info!("Created {} provider", provider.name());
		Ok(provider)
	}

	pub fn explorer_type(&self) -> ExplorerType {
		match self {
			Self::Neoscan(_) => ExplorerType::Neoscan,
			Self::Dora(_) => ExplorerType::Dora,
		}
	}

	fn inner(&self) -> &dyn Provider {
		match self {
			Self::Neoscan(client) => client,
			Self::Dora(client) => client,
		}
	}
}

#[async_trait]
impl Provider for ExplorerProvider {
	fn name(&self) -> String {
		self.inner().name()
	}

	async fn get_rpc_endpoint(&self) -> Result<String, ProviderError> {
		self.inner().get_rpc_endpoint().await
	}

	async fn get_balance(&self, address: &str) -> Result<Balance, ProviderError> {
		self.inner().get_balance(address).await
	}

	async fn get_claims(&self, address: &str) -> Result<Claims, ProviderError> {
		self.inner().get_claims(address).await
	}

	async fn get_max_claim_amount(&self, address: &str) -> Result<Fixed8, ProviderError> {
		self.inner().get_max_claim_amount(address).await
	}

	async fn get_height(&self) -> Result<u64, ProviderError> {
		self.inner().get_height().await
	}

	async fn get_transaction(&self, txid: &str) -> Result<Transaction, ProviderError> {
		self.inner().get_transaction(txid).await
	}

	async fn get_transaction_history(
		&self,
		address: &str,
	) -> Result<Vec<PastTransaction>, ProviderError> {
		self.inner().get_transaction_history(address).await
	}

	async fn get_address_abstracts(
		&self,
		address: &str,
		page: u32,
	) -> Result<AddressAbstracts, ProviderError> {
		self.inner().get_address_abstracts(address, page).await
	}
}

//! Provider interface shared by every explorer backend.
//!
//! Upstream code only depends on this trait, so either backend can be used
//! interchangeably: for equivalent chain state both produce equal canonical
//! records.

use async_trait::async_trait;

use crate::{
	models::{AddressAbstracts, Balance, Claims, Fixed8, PastTransaction, Transaction},
	services::explorer::ProviderError,
};

/// Defines the operations every explorer provider offers
#[async_trait]
pub trait Provider: Send + Sync {
	/// Display name of the provider, e.g. `Neoscan[https://api.neoscan.io/api/main_net]`
	fn name(&self) -> String;

	/// Picks a responsive RPC node at the current chain tip
	///
	/// # Returns
	/// * `Result<String, ProviderError>` - URL of the selected node
	async fn get_rpc_endpoint(&self) -> Result<String, ProviderError>;

	/// Retrieves the native asset and token balances of an address
	async fn get_balance(&self, address: &str) -> Result<Balance, ProviderError>;

	/// Retrieves the claimable outputs of an address
	async fn get_claims(&self, address: &str) -> Result<Claims, ProviderError>;

	/// Retrieves the total unclaimed GAS of an address
	async fn get_max_claim_amount(&self, address: &str) -> Result<Fixed8, ProviderError>;

	/// Retrieves the block height indexed by the explorer
	async fn get_height(&self) -> Result<u64, ProviderError>;

	/// Retrieves a single transaction by id
	async fn get_transaction(&self, txid: &str) -> Result<Transaction, ProviderError>;

	/// Retrieves the recent transactions of an address with the net change per asset
	///
	/// # Note
	/// Backends without an equivalent endpoint keep this default and fail with
	/// `NotImplemented`.
	async fn get_transaction_history(
		&self,
		_address: &str,
	) -> Result<Vec<PastTransaction>, ProviderError> {
		Err(ProviderError::not_implemented(
			"get_transaction_history",
			&self.name(),
		))
	}

	/// Retrieves one page of the transfer activity of an address
	///
	/// # Arguments
	/// * `address` - The address to query
	/// * `page` - Page number, starting at 1
	async fn get_address_abstracts(
		&self,
		address: &str,
		page: u32,
	) -> Result<AddressAbstracts, ProviderError>;
}

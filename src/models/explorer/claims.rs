use serde::{Deserialize, Serialize};

use crate::models::Fixed8;

/// A claimable output: an accrual entitlement tied to a past unspent output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimItem {
	/// Transaction that created the output
	pub transaction_id: String,

	/// Position of the output in that transaction
	pub output_index: u32,

	/// Amount held by the output
	pub value: Fixed8,

	/// Height at which accrual started
	pub start_height: u64,

	/// Height at which accrual ended
	pub end_height: u64,

	/// Amount that can currently be claimed for this output
	pub unclaimed: Fixed8,
}

/// Canonical list of claimable outputs for an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
	/// Network the claims were read from
	pub net: String,

	/// Address that was queried
	pub address: String,

	/// Claimable outputs, in backend order
	pub claims: Vec<ClaimItem>,
}

impl Claims {
	pub fn new(net: impl Into<String>, address: impl Into<String>, claims: Vec<ClaimItem>) -> Self {
		Self {
			net: net.into(),
			address: address.into(),
			claims,
		}
	}

	/// Sum of the unclaimed amounts over every claim
	pub fn total_unclaimed(&self) -> Fixed8 {
		self.claims.iter().map(|claim| claim.unclaimed).sum()
	}
}

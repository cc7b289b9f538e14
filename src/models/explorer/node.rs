use serde::{Deserialize, Serialize};

/// A candidate RPC node as reported by an explorer's node list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RpcNode {
	/// RPC URL of the node
	pub url: String,

	/// Block height last reported for the node
	pub height: u64,
}

impl RpcNode {
	pub fn new(url: impl Into<String>, height: u64) -> Self {
		Self {
			url: url.into(),
			height,
		}
	}
}

//! Network transports for explorer clients.
//!
//! Explorers are plain REST services: every call is a GET returning JSON. Node
//! probes are the one place a POST is issued, against the candidate RPC node
//! rather than the explorer.

mod error;
mod http;

pub use error::TransportError;
pub use http::HttpTransportClient;

use serde_json::{json, Value};

/// Path of the node list, relative to the explorer base URL
pub const NODES_PATH: &str = "/get_all_nodes";

/// JSON-RPC method used to check that a candidate node is alive
pub const PROBE_METHOD: &str = "getversion";

/// Request body sent to candidate nodes when probing them
pub fn probe_payload() -> Value {
	json!({
		"jsonrpc": "2.0",
		"id": 1,
		"method": PROBE_METHOD,
		"params": []
	})
}

/// Base trait for explorer transports
#[async_trait::async_trait]
pub trait ExplorerTransport: Send + Sync {
	/// Base URL every request path is appended to
	fn base_url(&self) -> String;

	/// Issues a GET for `path` (relative to the base URL) and decodes the body as JSON
	async fn get_json(&self, path: &str) -> Result<Value, TransportError>;
}

/// Extension trait for transports able to probe candidate RPC nodes
#[async_trait::async_trait]
pub trait ProbingTransport: ExplorerTransport {
	/// Sends a liveness probe to `url`; any 2xx answer counts as alive
	async fn try_connect(&self, url: &str) -> Result<(), anyhow::Error>;
}

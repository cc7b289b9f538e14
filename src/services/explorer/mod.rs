//! Explorer access.
//!
//! Normalizes two explorer REST backends behind the [`Provider`] trait:
//! - `transports`: HTTP access to an explorer and node probes
//! - `nodes`: RPC node filtering and the best-endpoint race
//! - `clients`: per-backend response handling
//! - `factory`: backend selection from a network entry

mod clients;
mod error;
mod factory;
mod nodes;
mod provider;
mod transports;

pub use clients::{DoraClient, NeoscanClient};
pub use error::ProviderError;
pub use factory::ExplorerProvider;
pub use nodes::{filter_https_only, find_good_nodes_from_height, get_best_url, resolve_rpc_endpoint};
pub use provider::Provider;
pub use transports::{
	probe_payload, ExplorerTransport, HttpTransportClient, ProbingTransport, TransportError,
	NODES_PATH, PROBE_METHOD,
};

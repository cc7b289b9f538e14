//! RPC node selection.
//!
//! Explorers publish the RPC nodes they track together with the last block
//! height each node reported. Selection keeps the nodes at the tip, optionally
//! restricted to https, then races liveness probes and takes the first node that
//! answers.

use futures::{future::select_ok, FutureExt};
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::{
	models::RpcNode,
	services::explorer::{
		error::ProviderError,
		transports::{ProbingTransport, NODES_PATH},
	},
};

/// Keeps the nodes whose URL uses the https scheme
pub fn filter_https_only(nodes: &[RpcNode]) -> Vec<RpcNode> {
	nodes
		.iter()
		.filter(|node| {
			url::Url::parse(&node.url)
				.map(|url| url.scheme() == "https")
				.unwrap_or(false)
		})
		.cloned()
		.collect()
}

/// Keeps the nodes reporting the highest block height, ties included
pub fn find_good_nodes_from_height(nodes: &[RpcNode]) -> Vec<RpcNode> {
	let Some(max_height) = nodes.iter().map(|node| node.height).max() else {
		return Vec::new();
	};

	nodes
		.iter()
		.filter(|node| node.height == max_height)
		.cloned()
		.collect()
}

/// Races a liveness probe against every node and returns the first URL to answer
///
/// Probes still in flight when a winner is found are dropped.
///
/// # Errors
/// * `NoHealthyEndpoint` - `nodes` is empty or every probe failed
#[instrument(skip_all, fields(candidates = nodes.len()))]
pub async fn get_best_url<T>(transport: &T, nodes: &[RpcNode]) -> Result<String, ProviderError>
where
	T: ProbingTransport + ?Sized,
{
	if nodes.is_empty() {
		return Err(ProviderError::no_healthy_endpoint(
			"no candidate nodes to probe",
			None,
			None,
		));
	}

	let probes = nodes.iter().map(|node| {
		let url = node.url.clone();
		async move {
			transport.try_connect(&url).await?;
			Ok::<_, anyhow::Error>(url)
		}
		.boxed()
	});

	match select_ok(probes).await {
		Ok((url, _remaining)) => {
			debug!(url = %url, "selected RPC node");
			Ok(url)
		}
		Err(last_error) => Err(ProviderError::no_healthy_endpoint(
			format!("all {} candidate nodes failed the liveness probe", nodes.len()),
			Some(last_error.into()),
			Some(node_metadata(nodes)),
		)),
	}
}

/// Fetches the explorer's node list and picks the best RPC endpoint
///
/// Steps run in order: fetch, optional https filter, height filter, probe race.
/// A failed fetch is returned as the transport error it is.
pub async fn resolve_rpc_endpoint<T>(transport: &T, https_only: bool) -> Result<String, ProviderError>
where
	T: ProbingTransport + ?Sized,
{
	let raw = transport.get_json(NODES_PATH).await?;

	let mut nodes: Vec<RpcNode> = serde_json::from_value(raw).map_err(|e| {
		ProviderError::malformed_response(
			"get_rpc_endpoint",
			transport.base_url(),
			format!("Unexpected node list: {}", e),
			Some(Box::new(e)),
			None,
		)
	})?;
	debug!(count = nodes.len(), "fetched node list");

	if https_only {
		nodes = filter_https_only(&nodes);
		debug!(count = nodes.len(), "kept https nodes");
	}

	let good_nodes = find_good_nodes_from_height(&nodes);
	debug!(count = good_nodes.len(), "kept nodes at max height");

	get_best_url(transport, &good_nodes).await
}

fn node_metadata(nodes: &[RpcNode]) -> HashMap<String, String> {
	HashMap::from([(
		"candidates".to_string(),
		nodes
			.iter()
			.map(|node| node.url.as_str())
			.collect::<Vec<_>>()
			.join(","),
	)])
}

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// --- Default values for HTTP client settings ---
fn default_request_timeout() -> Duration {
	Duration::from_secs(30)
}

fn default_connect_timeout() -> Duration {
	Duration::from_secs(20)
}

fn default_pool_idle_timeout() -> Duration {
	Duration::from_secs(90)
}

fn default_pool_max_idle_per_host() -> usize {
	32
}

/// Settings for the HTTP client shared by explorer calls and node probes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct HttpClientConfig {
	/// Total time allowed for a single request
	#[serde(default = "default_request_timeout")]
	pub request_timeout: Duration,
	/// Time allowed to establish a connection
	#[serde(default = "default_connect_timeout")]
	pub connect_timeout: Duration,
	/// How long idle pooled connections are kept
	#[serde(default = "default_pool_idle_timeout")]
	pub pool_idle_timeout: Duration,
	/// Maximum idle pooled connections per host
	#[serde(default = "default_pool_max_idle_per_host")]
	pub pool_max_idle_per_host: usize,
}

impl Default for HttpClientConfig {
	fn default() -> Self {
		Self {
			request_timeout: default_request_timeout(),
			connect_timeout: default_connect_timeout(),
			pool_idle_timeout: default_pool_idle_timeout(),
			pool_max_idle_per_host: default_pool_max_idle_per_host(),
		}
	}
}

/// Creates the HTTP client used by explorer transports
///
/// The client is wrapped in a middleware stack so callers can layer their own
/// behaviour on top, but no retry middleware is installed: a failed request
/// surfaces to the caller immediately.
///
/// # Parameters:
/// - `config`: Timeouts and pooling settings
///
/// # Returns
/// A `ClientWithMiddleware`, or the builder error if the TLS backend cannot be initialised
pub fn create_http_client(config: &HttpClientConfig) -> Result<ClientWithMiddleware, reqwest::Error> {
	let base_client = reqwest::ClientBuilder::new()
		.pool_idle_timeout(config.pool_idle_timeout)
		.pool_max_idle_per_host(config.pool_max_idle_per_host)
		.timeout(config.request_timeout)
		.connect_timeout(config.connect_timeout)
		.build()?;

	Ok(ClientBuilder::new(base_client).build())
}

//! Explorer command line entry point.
//!
//! Loads the network registry, builds the requested explorer provider and
//! prints the canonical record returned by a single provider operation as
//! pretty JSON.

pub mod models;
pub mod services;
pub mod utils;

use crate::{
	models::{ConfigLoader, ExplorerType, Network},
	services::explorer::{ExplorerProvider, Provider},
	utils::{http::HttpClientConfig, logging::setup_logging, parse_string_to_bytes_size},
};

use clap::{Parser, Subcommand};
use dotenvy::dotenv_override;
use serde::Serialize;
use std::{
	collections::HashMap,
	env::{set_var, var},
	path::PathBuf,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(
	name = "neo-explorer",
	about = "Query NEO blockchain explorers through a single normalized interface.",
	version
)]
struct Cli {
	/// Network slug to query (as configured in the networks directory)
	#[arg(long, global = true, default_value = "mainnet", value_name = "NETWORK_SLUG")]
	network: String,

	/// Directory containing network configuration files
	#[arg(long, global = true, default_value = "config/networks", value_name = "PATH")]
	config_dir: PathBuf,

	/// Explorer backend to use (neoscan, dora)
	#[arg(long, global = true, default_value = "neoscan", value_name = "EXPLORER")]
	explorer: ExplorerType,

	/// Write logs to file instead of stdout
	#[arg(long, global = true)]
	log_file: bool,

	/// Set log level (trace, debug, info, warn, error)
	#[arg(long, global = true, value_name = "LEVEL")]
	log_level: Option<String>,

	/// Path to store log files (default: logs/)
	#[arg(long, global = true, value_name = "PATH")]
	log_path: Option<String>,

	/// Maximum log file size before rolling (e.g., "1GB", "500MB", "1024KB")
	#[arg(long, global = true, value_name = "SIZE", value_parser = parse_string_to_bytes_size)]
	log_max_size: Option<u64>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Validate the network configuration files and list them
	Networks,
	#[command(flatten)]
	Query(QueryCommand),
}

/// Commands answered by an explorer provider
#[derive(Subcommand)]
enum QueryCommand {
	/// Select the best RPC node
	Endpoint,
	/// Show the balance of an address
	Balance { address: String },
	/// Show the claimable outputs of an address
	Claims { address: String },
	/// Show the total unclaimed GAS of an address
	Unclaimed { address: String },
	/// Show the block height indexed by the explorer
	Height,
	/// Show a transaction
	Transaction { txid: String },
	/// Show the net change per asset of the latest transactions of an address
	History { address: String },
	/// Show a page of transfer activity of an address
	Abstracts {
		address: String,
		#[arg(default_value_t = 1)]
		page: u32,
	},
}

impl Cli {
	/// Apply CLI options to environment variables, overriding any existing values
	fn apply_to_env(&self) {
		dotenv_override().ok();

		if self.log_file {
			set_var("LOG_MODE", "file");
		}

		if let Ok(level) = var("RUST_LOG") {
			set_var("LOG_LEVEL", level);
		}

		if let Some(level) = &self.log_level {
			set_var("LOG_LEVEL", level);
			set_var("RUST_LOG", level);
		}

		if let Some(path) = &self.log_path {
			set_var("LOG_DATA_DIR", path);
		}

		if let Some(max_size) = &self.log_max_size {
			set_var("LOG_MAX_SIZE", max_size.to_string());
		}
	}
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

async fn run_query(provider: &ExplorerProvider, command: QueryCommand) -> anyhow::Result<()> {
	match command {
		QueryCommand::Endpoint => print_json(&provider.get_rpc_endpoint().await?),
		QueryCommand::Balance { address } => print_json(&provider.get_balance(&address).await?),
		QueryCommand::Claims { address } => print_json(&provider.get_claims(&address).await?),
		QueryCommand::Unclaimed { address } => {
			print_json(&provider.get_max_claim_amount(&address).await?)
		}
		QueryCommand::Height => print_json(&provider.get_height().await?),
		QueryCommand::Transaction { txid } => print_json(&provider.get_transaction(&txid).await?),
		QueryCommand::History { address } => {
			print_json(&provider.get_transaction_history(&address).await?)
		}
		QueryCommand::Abstracts { address, page } => {
			print_json(&provider.get_address_abstracts(&address, page).await?)
		}
	}
}

/// Main entry point for the explorer CLI.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, the network or
/// explorer is unknown, or the provider call fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	cli.apply_to_env();

	setup_logging().unwrap_or_else(|e| {
		error!("Failed to setup logging: {}", e);
	});

	let networks: HashMap<String, Network> = Network::load_all(Some(cli.config_dir.as_path()))
		.await
		.map_err(|e| anyhow::anyhow!("Failed to load network configuration: {}", e))?;

	let query = match cli.command {
		Command::Networks => {
			let mut listed: Vec<_> = networks.values().collect();
			listed.sort_by(|a, b| a.slug.cmp(&b.slug));
			info!("Configuration is valid ({} networks)", listed.len());
			return print_json(&listed);
		}
		Command::Query(query) => query,
	};

	let network = networks
		.values()
		.find(|network| network.slug == cli.network)
		.ok_or_else(|| {
			anyhow::anyhow!(
				"Network '{}' not found in {}",
				cli.network,
				cli.config_dir.display()
			)
		})?;

	let provider =
		ExplorerProvider::from_network(network, cli.explorer, &HttpClientConfig::default())?;

	run_query(&provider, query).await
}

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::utils::normalize_string;

/// Explorer backend family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplorerType {
	/// Versioned `/v1/...` explorer API
	Neoscan,
	/// Unversioned explorer API
	Dora,
}

impl fmt::Display for ExplorerType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ExplorerType::Neoscan => write!(f, "neoscan"),
			ExplorerType::Dora => write!(f, "dora"),
		}
	}
}

impl FromStr for ExplorerType {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match normalize_string(s).as_str() {
			"neoscan" => Ok(ExplorerType::Neoscan),
			"dora" => Ok(ExplorerType::Dora),
			other => Err(format!(
				"unknown explorer '{}', expected one of: neoscan, dora",
				other
			)),
		}
	}
}

/// Base URLs of the explorers serving a network
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExplorerUrls {
	/// Base URL of the Neoscan-style explorer (e.g. `https://api.neoscan.io/api/main_net`)
	pub neoscan: Option<String>,

	/// Base URL of the Dora-style explorer
	pub dora: Option<String>,
}

/// Registry entry describing how to reach the explorers of one network.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Network {
	/// Unique identifier for this network; also used as the `net` of canonical records
	pub slug: String,

	/// Human-readable name of the network
	pub name: String,

	/// Explorer base URLs
	pub explorers: ExplorerUrls,

	/// Only select RPC nodes reachable over https
	#[serde(default)]
	pub https_only: bool,
}

impl Network {
	/// Returns the base URL configured for `explorer`, if any
	pub fn explorer_url(&self, explorer: ExplorerType) -> Option<&str> {
		match explorer {
			ExplorerType::Neoscan => self.explorers.neoscan.as_deref(),
			ExplorerType::Dora => self.explorers.dora.as_deref(),
		}
	}

	/// Iterates over every configured explorer with its base URL
	pub fn configured_explorers(&self) -> impl Iterator<Item = (ExplorerType, &str)> {
		[ExplorerType::Neoscan, ExplorerType::Dora]
			.into_iter()
			.filter_map(move |explorer| self.explorer_url(explorer).map(|url| (explorer, url)))
	}
}

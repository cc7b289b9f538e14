//! Network registry loading and validation.
//!
//! Each JSON file under the networks directory describes one network and the
//! explorer base URLs serving it.

use async_trait::async_trait;
use std::{collections::HashMap, path::Path};

use crate::{
	models::{config::error::ConfigError, ConfigLoader, Network},
	utils::normalize_string,
};

/// Directory searched when no explicit path is given
pub const DEFAULT_NETWORKS_DIR: &str = "config/networks";

fn path_metadata(path: &Path) -> Option<HashMap<String, String>> {
	Some(HashMap::from([(
		"path".to_string(),
		path.display().to_string(),
	)]))
}

fn validate_explorer_url(slug: &str, explorer: &str, raw: &str) -> Result<(), ConfigError> {
	let parsed = url::Url::parse(raw).map_err(|e| {
		ConfigError::validation_error(
			format!("Invalid {} explorer URL: {}", explorer, e),
			Some(Box::new(e)),
			Some(HashMap::from([
				("network_slug".to_string(), slug.to_string()),
				("url".to_string(), raw.to_string()),
			])),
		)
	})?;

	if !matches!(parsed.scheme(), "http" | "https") {
		return Err(ConfigError::validation_error(
			"All explorer URLs must start with http:// or https://",
			None,
			Some(HashMap::from([
				("network_slug".to_string(), slug.to_string()),
				("url".to_string(), raw.to_string()),
			])),
		));
	}

	Ok(())
}

#[async_trait]
impl ConfigLoader for Network {
	/// Load all network configurations from a directory
	///
	/// Entries are keyed by file stem. Non-JSON files are skipped.
	async fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let network_dir = path.unwrap_or(Path::new(DEFAULT_NETWORKS_DIR));
		let mut pairs = Vec::new();

		if !network_dir.exists() {
			return Err(ConfigError::file_error(
				"networks directory not found",
				None,
				path_metadata(network_dir),
			));
		}

		let entries = std::fs::read_dir(network_dir).map_err(|e| {
			ConfigError::file_error(
				format!("failed to read networks directory: {}", e),
				Some(Box::new(e)),
				path_metadata(network_dir),
			)
		})?;

		for entry in entries {
			let entry = entry.map_err(|e| {
				ConfigError::file_error(
					format!("failed to read directory entry: {}", e),
					Some(Box::new(e)),
					path_metadata(network_dir),
				)
			})?;
			let path = entry.path();

			if !Self::is_json_file(&path) {
				continue;
			}

			let name = path
				.file_stem()
				.and_then(|s| s.to_str())
				.unwrap_or("unknown")
				.to_string();

			let network = Self::load_from_path(&path).await?;

			let existing_networks: Vec<&Network> =
				pairs.iter().map(|(_, network)| network).collect();
			Self::validate_uniqueness(&existing_networks, &network, &path.display().to_string())?;

			pairs.push((name, network));
		}

		Ok(T::from_iter(pairs))
	}

	/// Load and validate a single network configuration file
	async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path).map_err(|e| {
			ConfigError::file_error(
				format!("failed to open network config file: {}", e),
				Some(Box::new(e)),
				path_metadata(path),
			)
		})?;
		let config: Network = serde_json::from_reader(file).map_err(|e| {
			ConfigError::parse_error(
				format!("failed to parse network config: {}", e),
				Some(Box::new(e)),
				path_metadata(path),
			)
		})?;

		config.validate()?;

		Ok(config)
	}

	/// Validate the network configuration
	///
	/// Ensures that:
	/// - The network has a name and a well-formed slug
	/// - At least one explorer URL is configured
	/// - Every explorer URL is an absolute http(s) URL
	fn validate(&self) -> Result<(), ConfigError> {
		if self.name.trim().is_empty() {
			return Err(ConfigError::validation_error(
				"Network name is required",
				None,
				None,
			));
		}

		if self.slug.is_empty()
			|| !self
				.slug
				.chars()
				.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
		{
			return Err(ConfigError::validation_error(
				"Slug must contain only lowercase letters, numbers, and underscores",
				None,
				None,
			));
		}

		if self.configured_explorers().next().is_none() {
			return Err(ConfigError::validation_error(
				"At least one explorer URL must be configured",
				None,
				Some(HashMap::from([(
					"network_slug".to_string(),
					self.slug.clone(),
				)])),
			));
		}

		for (explorer, url) in self.configured_explorers() {
			validate_explorer_url(&self.slug, &explorer.to_string(), url)?;
		}

		self.validate_protocol();

		Ok(())
	}

	/// Logs a warning for every explorer reached over plain http
	fn validate_protocol(&self) {
		for (explorer, url) in self.configured_explorers() {
			if url.starts_with("http://") {
				tracing::warn!(
					"Network '{}' uses an insecure {} explorer URL: {}",
					self.slug,
					explorer,
					url
				);
			}
		}
	}

	fn validate_uniqueness(
		instances: &[&Self],
		current_instance: &Self,
		file_path: &str,
	) -> Result<(), ConfigError> {
		let fields = [
			("name", &current_instance.name),
			("slug", &current_instance.slug),
		];

		for (field_name, field_value) in fields {
			if instances.iter().any(|existing_network| {
				let existing_value = match field_name {
					"name" => &existing_network.name,
					_ => &existing_network.slug,
				};
				normalize_string(existing_value) == normalize_string(field_value)
			}) {
				return Err(ConfigError::validation_error(
					format!("Duplicate network {} found: '{}'", field_name, field_value),
					None,
					Some(HashMap::from([
						(format!("network_{}", field_name), field_value.to_string()),
						("path".to_string(), file_path.to_string()),
					])),
				));
			}
		}
		Ok(())
	}
}

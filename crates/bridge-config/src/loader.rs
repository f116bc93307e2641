//! Configuration loading from files and environment.

use crate::types::*;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use tracing::{debug, info};

/// Overrides `bridge.rpc_url`.
pub const ENV_RPC_URL: &str = "BRIDGE_RPC_URL";

/// Overrides `logging.level`.
pub const ENV_LOG_LEVEL: &str = "BRIDGE_LOG_LEVEL";

/// Path of the configuration file used by `load_config`.
pub const ENV_CONFIG_FILE: &str = "BRIDGE_CONFIG";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
	/// Load configuration from file, applying environment substitution and
	/// overrides before validation.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<BridgeConfig> {
		let path = path.as_ref();
		info!("Loading configuration from {:?}", path);

		let contents = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {:?}", path))?;
		let contents = Self::substitute_env_vars(&contents, |name| std::env::var(name).ok())?;

		let mut config = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml(&contents)?,
			Some("json") => Self::from_json(&contents)?,
			Some("yaml") | Some("yml") => Self::from_yaml(&contents)?,
			_ => anyhow::bail!("Unsupported config format: {:?}", path),
		};

		Self::apply_overrides(&mut config, |name| std::env::var(name).ok());
		Self::validate_config(&config)?;
		Ok(config)
	}

	/// Load from TOML string
	pub fn from_toml(contents: &str) -> Result<BridgeConfig> {
		toml::from_str(contents).map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))
	}

	/// Load from JSON string
	pub fn from_json(contents: &str) -> Result<BridgeConfig> {
		serde_json::from_str(contents).context("Failed to parse JSON")
	}

	/// Load from YAML string
	pub fn from_yaml(contents: &str) -> Result<BridgeConfig> {
		serde_yaml::from_str(contents).context("Failed to parse YAML")
	}

	/// Replaces every `${NAME}` with the value `lookup` returns for `NAME`.
	///
	/// A reference to an unset variable is an error.
	pub fn substitute_env_vars<F>(contents: &str, lookup: F) -> Result<String>
	where
		F: Fn(&str) -> Option<String>,
	{
		let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")?;

		let mut missing = None;
		let result = re.replace_all(contents, |caps: &regex::Captures| {
			let name = &caps[1];
			match lookup(name) {
				Some(value) => value,
				None => {
					missing.get_or_insert_with(|| name.to_string());
					String::new()
				}
			}
		});

		if let Some(name) = missing {
			anyhow::bail!("Environment variable not found: {}", name);
		}

		Ok(result.into_owned())
	}

	/// Apply `BRIDGE_*` overrides
	pub fn apply_overrides<F>(config: &mut BridgeConfig, lookup: F)
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(url) = lookup(ENV_RPC_URL) {
			debug!("Overriding RPC URL from environment");
			config.bridge.rpc_url = url;
		}

		if let Some(level) = lookup(ENV_LOG_LEVEL) {
			debug!("Overriding log level from environment");
			config.logging.level = level;
		}
	}

	/// Validate configuration
	pub fn validate_config(config: &BridgeConfig) -> Result<()> {
		config.role()?;

		if config.bridge.rpc_url.trim().is_empty() {
			anyhow::bail!("RPC URL must not be empty");
		}

		if config.retry.max_attempts == 0 {
			anyhow::bail!("Retry max_attempts must be at least 1");
		}

		config.reserve_fee()?;

		if let Some(identifier) = &config.bridge.identifier {
			if identifier.trim().is_empty() {
				anyhow::bail!("Bridge identifier must not be blank when set");
			}
		}

		let mut seen = std::collections::HashSet::new();
		for (pair_id, entry) in &config.pairs {
			if !seen.insert(pair_id.to_lowercase()) {
				anyhow::bail!("Pair '{}' is configured more than once", pair_id);
			}
			entry.to_pair_config(pair_id)?;
		}

		Ok(())
	}
}

/// Load configuration from standard locations
pub fn load_config() -> Result<BridgeConfig> {
	// Check for config file in order:
	// 1. Environment variable BRIDGE_CONFIG
	// 2. ./config.toml
	// 3. ./config/bridge.toml

	if let Ok(path) = std::env::var(ENV_CONFIG_FILE) {
		return ConfigLoader::from_file(path);
	}

	let paths = ["./config.toml", "./config/bridge.toml"];

	for path in &paths {
		if Path::new(path).exists() {
			return ConfigLoader::from_file(path);
		}
	}

	anyhow::bail!(
		"No configuration file found; set {} or create ./config.toml",
		ENV_CONFIG_FILE
	)
}

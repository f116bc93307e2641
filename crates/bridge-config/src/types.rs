//! Configuration types for the bridge.

use anyhow::{Context, Result};
use bridge_chains::RetryPolicy;
use bridge_types::{chains::ChainId, common::parse_address, EndpointRole, PairConfig, U256};
use bridge_types::{StaticPairRegistry, DEFAULT_GAS_LIMIT, DEFAULT_RESERVE_FEE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

/// Complete bridge configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BridgeConfig {
	/// Endpoint identity
	pub bridge: BridgeSettings,
	/// RPC retry tunables
	#[serde(default)]
	pub retry: RetryConfig,
	/// Gas defaults
	#[serde(default)]
	pub gas: GasConfig,
	/// Log output
	#[serde(default)]
	pub logging: LoggingConfig,
	/// Asset pairs keyed by pair id
	#[serde(default)]
	pub pairs: HashMap<String, PairEntry>,
}

/// Which chain this builder serves and on which side of the swap.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BridgeSettings {
	/// Name used in logs
	pub name: String,
	pub chain_id: ChainId,
	/// `source` or `destination`
	pub role: String,
	pub rpc_url: String,
	/// Tag attached to swap transactions built by this endpoint
	#[serde(default)]
	pub identifier: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
	#[serde(default = "default_max_attempts")]
	pub max_attempts: u32,
	#[serde(default = "default_interval_ms")]
	pub interval_ms: u64,
}

impl Default for RetryConfig {
	fn default() -> Self {
		Self {
			max_attempts: default_max_attempts(),
			interval_ms: default_interval_ms(),
		}
	}
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GasConfig {
	/// Wei, as a decimal or 0x-prefixed hex string
	#[serde(default = "default_reserve_fee")]
	pub reserve_fee: String,
	#[serde(default = "default_gas_limit")]
	pub default_gas_limit: u64,
}

impl Default for GasConfig {
	fn default() -> Self {
		Self {
			reserve_fee: default_reserve_fee(),
			default_gas_limit: default_gas_limit(),
		}
	}
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
	#[serde(default = "default_log_level")]
	pub level: String,
	/// Emit JSON lines instead of human-readable output
	#[serde(default)]
	pub json: bool,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: default_log_level(),
			json: false,
		}
	}
}

/// One asset pair as written in the configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PairEntry {
	/// Token contract; omit for native-coin pairs
	#[serde(default)]
	pub contract_address: Option<String>,
	pub custodial_address: String,
	#[serde(default)]
	pub is_token: bool,
	#[serde(default)]
	pub gas_price_markup_percent: u64,
	#[serde(default)]
	pub default_gas_limit: u64,
	#[serde(default = "default_decimals")]
	pub source_decimals: u8,
	#[serde(default = "default_decimals")]
	pub destination_decimals: u8,
}

impl PairEntry {
	/// Parses the entry into the builder's pair configuration.
	pub fn to_pair_config(&self, pair_id: &str) -> Result<PairConfig> {
		let custodial_address = parse_address(&self.custodial_address)
			.with_context(|| {
				format!(
					"Pair '{}' has invalid custodial address: {}",
					pair_id, self.custodial_address
				)
			})?;
		if custodial_address.is_zero() {
			anyhow::bail!("Pair '{}' has zero custodial address", pair_id);
		}

		let contract_address = match &self.contract_address {
			Some(raw) => Some(parse_address(raw).with_context(|| {
				format!("Pair '{}' has invalid contract address: {}", pair_id, raw)
			})?),
			None => None,
		};

		if self.is_token && contract_address.map_or(true, |addr| addr.is_zero()) {
			anyhow::bail!("Token pair '{}' requires a contract address", pair_id);
		}

		Ok(PairConfig {
			pair_id: pair_id.to_string(),
			contract_address,
			custodial_address,
			is_token: self.is_token,
			gas_price_markup_percent: self.gas_price_markup_percent,
			default_gas_limit: self.default_gas_limit,
			source_decimals: self.source_decimals,
			destination_decimals: self.destination_decimals,
		})
	}
}

impl BridgeConfig {
	pub fn role(&self) -> Result<EndpointRole> {
		EndpointRole::from_str(&self.bridge.role)
			.map_err(|e| anyhow::anyhow!("Invalid bridge role: {}", e))
	}

	pub fn retry_policy(&self) -> RetryPolicy {
		RetryPolicy::new(
			self.retry.max_attempts,
			Duration::from_millis(self.retry.interval_ms),
		)
	}

	pub fn reserve_fee(&self) -> Result<U256> {
		U256::from_str(self.gas.reserve_fee.trim())
			.with_context(|| format!("Invalid gas reserve fee: {}", self.gas.reserve_fee))
	}

	/// Builds the pair registry from all configured pairs.
	pub fn pair_registry(&self) -> Result<StaticPairRegistry> {
		let pairs = self
			.pairs
			.iter()
			.map(|(id, entry)| entry.to_pair_config(id))
			.collect::<Result<Vec<_>>>()?;
		Ok(StaticPairRegistry::new(pairs))
	}
}

fn default_max_attempts() -> u32 {
	3
}

fn default_interval_ms() -> u64 {
	1000
}

fn default_reserve_fee() -> String {
	DEFAULT_RESERVE_FEE.to_string()
}

fn default_gas_limit() -> u64 {
	DEFAULT_GAS_LIMIT
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_decimals() -> u8 {
	18
}

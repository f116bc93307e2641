//! Asset pair configuration and lookup.

use crate::common::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-pair settings, read-only while a transaction is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairConfig {
	pub pair_id: String,
	/// Token contract on this chain; absent or zero for native-coin pairs.
	pub contract_address: Option<Address>,
	/// Address held by the multi-party signing service.
	pub custodial_address: Address,
	pub is_token: bool,
	/// Added to the suggested gas price of swap transactions, in percent.
	pub gas_price_markup_percent: u64,
	/// Gas limit used when the caller leaves it unset; 0 means unset.
	pub default_gas_limit: u64,
	pub source_decimals: u8,
	pub destination_decimals: u8,
}

impl PairConfig {
	/// Token contract address, ignoring a configured zero address.
	pub fn token_contract(&self) -> Option<Address> {
		self.contract_address.filter(|addr| !addr.is_zero())
	}

	pub fn is_custodial(&self, address: &Address) -> bool {
		self.custodial_address == *address
	}
}

/// Lookup of pair configuration by pair id.
pub trait PairRegistry: Send + Sync {
	fn pair_config(&self, pair_id: &str) -> Option<PairConfig>;
}

/// Registry over a fixed set of pairs, keyed case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct StaticPairRegistry {
	pairs: HashMap<String, PairConfig>,
}

impl StaticPairRegistry {
	pub fn new(pairs: impl IntoIterator<Item = PairConfig>) -> Self {
		let pairs = pairs
			.into_iter()
			.map(|pair| (pair.pair_id.to_lowercase(), pair))
			.collect();
		Self { pairs }
	}

	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}
}

impl PairRegistry for StaticPairRegistry {
	fn pair_config(&self, pair_id: &str) -> Option<PairConfig> {
		self.pairs.get(&pair_id.to_lowercase()).cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pair(id: &str, contract: Option<Address>) -> PairConfig {
		PairConfig {
			pair_id: id.to_string(),
			contract_address: contract,
			custodial_address: Address::repeat_byte(0x11),
			is_token: contract.is_some(),
			gas_price_markup_percent: 0,
			default_gas_limit: 0,
			source_decimals: 18,
			destination_decimals: 18,
		}
	}

	#[test]
	fn test_lookup_is_case_insensitive() {
		let registry = StaticPairRegistry::new(vec![pair("USDT", None)]);
		assert_eq!(registry.len(), 1);
		assert!(registry.pair_config("usdt").is_some());
		assert!(registry.pair_config("Usdt").is_some());
		assert!(registry.pair_config("eth").is_none());
	}

	#[test]
	fn test_token_contract_ignores_zero() {
		assert!(pair("eth", Some(Address::ZERO)).token_contract().is_none());
		assert_eq!(
			pair("usdt", Some(Address::repeat_byte(0x22))).token_contract(),
			Some(Address::repeat_byte(0x22))
		);
	}
}

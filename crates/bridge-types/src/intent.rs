//! Build intents: what the orchestrator asks the builder to construct.

use crate::common::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a swap leg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapType {
	/// Plain transfer, not part of a swap.
	#[default]
	None,
	/// Credit a destination-chain user for a deposit on the origin chain.
	SwapIn,
	/// Release funds on the origin chain for a burn on the destination chain.
	SwapOut,
}

impl SwapType {
	pub fn is_swap(&self) -> bool {
		!matches!(self, SwapType::None)
	}
}

impl fmt::Display for SwapType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SwapType::None => write!(f, "none"),
			SwapType::SwapIn => write!(f, "swapin"),
			SwapType::SwapOut => write!(f, "swapout"),
		}
	}
}

/// Caller-supplied numeric fields.
///
/// `None` means "resolve it for me"; `Some(0)` is an explicit zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasOverrides {
	pub gas_price: Option<U256>,
	pub nonce: Option<u64>,
	pub gas_limit: Option<u64>,
}

/// A request to build one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildIntent {
	/// Asset pair the swap belongs to.
	pub pair_id: String,
	/// Identifier of the originating swap (usually the origin tx hash).
	pub swap_id: String,
	pub swap_type: SwapType,
	/// Sender; swap legs default to the pair's custodial address.
	pub from: Option<Address>,
	/// Recipient of a plain transfer. Swap legs derive their own.
	pub to: Option<Address>,
	/// Destination-chain recipient of a swap leg, as received.
	pub bind: String,
	pub value: Option<U256>,
	/// Amount before cross-chain conversion.
	pub origin_value: U256,
	/// Raw call data; only allowed for plain transfers.
	pub input: Option<Bytes>,
	pub overrides: GasOverrides,
	/// Free-form tag recorded with the built transaction.
	pub identifier: Option<String>,
}

impl BuildIntent {
	/// Intent for crediting `bind` on the destination chain.
	pub fn swap_in(
		pair_id: impl Into<String>,
		swap_id: impl Into<String>,
		bind: impl Into<String>,
		origin_value: U256,
	) -> Self {
		Self {
			pair_id: pair_id.into(),
			swap_id: swap_id.into(),
			swap_type: SwapType::SwapIn,
			bind: bind.into(),
			origin_value,
			..Default::default()
		}
	}

	/// Intent for releasing funds to `bind` on the origin chain.
	pub fn swap_out(
		pair_id: impl Into<String>,
		swap_id: impl Into<String>,
		bind: impl Into<String>,
		origin_value: U256,
	) -> Self {
		Self {
			pair_id: pair_id.into(),
			swap_id: swap_id.into(),
			swap_type: SwapType::SwapOut,
			bind: bind.into(),
			origin_value,
			..Default::default()
		}
	}

	/// Intent for a plain value transfer.
	pub fn transfer(from: Address, to: Address, value: U256) -> Self {
		Self {
			from: Some(from),
			to: Some(to),
			value: Some(value),
			..Default::default()
		}
	}

	pub fn with_from(mut self, from: Address) -> Self {
		self.from = Some(from);
		self
	}

	pub fn with_pair(mut self, pair_id: impl Into<String>) -> Self {
		self.pair_id = pair_id.into();
		self
	}

	pub fn with_value(mut self, value: U256) -> Self {
		self.value = Some(value);
		self
	}

	pub fn with_input(mut self, input: impl Into<Bytes>) -> Self {
		self.input = Some(input.into());
		self
	}

	pub fn with_overrides(mut self, overrides: GasOverrides) -> Self {
		self.overrides = overrides;
		self
	}

	pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
		self.identifier = Some(identifier.into());
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_swap_type_display() {
		assert_eq!(SwapType::None.to_string(), "none");
		assert_eq!(SwapType::SwapIn.to_string(), "swapin");
		assert_eq!(SwapType::SwapOut.to_string(), "swapout");
		assert!(!SwapType::None.is_swap());
		assert!(SwapType::SwapOut.is_swap());
	}

	#[test]
	fn test_intent_from_json() {
		let json = r#"{
			"pair_id": "usdt",
			"swap_id": "0x01",
			"swap_type": "swapin",
			"bind": "0x00000000000000000000000000000000000000aa",
			"origin_value": "0x64",
			"overrides": { "nonce": 7 }
		}"#;

		let intent: BuildIntent = serde_json::from_str(json).unwrap();
		assert_eq!(intent.swap_type, SwapType::SwapIn);
		assert_eq!(intent.origin_value, U256::from(100));
		assert_eq!(intent.overrides.nonce, Some(7));
		assert!(intent.overrides.gas_price.is_none());
		assert!(intent.from.is_none());
		assert!(intent.input.is_none());
	}
}

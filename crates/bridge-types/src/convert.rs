//! Cross-chain value conversion.

use crate::{common::U256, pair::PairRegistry};
use std::sync::Arc;

/// Which way an amount crosses the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvertDirection {
	/// Origin-chain amount credited on the destination chain (swap-in).
	IntoDestination,
	/// Destination-chain amount released on the origin chain (swap-out).
	OutOfDestination,
}

/// Converts an origin amount into the amount the built transaction moves.
///
/// Treated as pure and infallible by the builder.
pub trait ValueConverter: Send + Sync {
	fn convert(&self, pair_id: &str, origin_value: U256, direction: ConvertDirection) -> U256;
}

/// Rescales amounts between the pair's source and destination decimals.
///
/// Unknown pairs pass through unchanged. No fee is applied.
pub struct DecimalConverter {
	registry: Arc<dyn PairRegistry>,
}

impl DecimalConverter {
	pub fn new(registry: Arc<dyn PairRegistry>) -> Self {
		Self { registry }
	}
}

fn rescale(value: U256, from_decimals: u8, to_decimals: u8) -> U256 {
	let ten = U256::from(10u8);
	if to_decimals > from_decimals {
		let factor = ten.pow(U256::from(to_decimals - from_decimals));
		value.saturating_mul(factor)
	} else if from_decimals > to_decimals {
		let factor = ten.pow(U256::from(from_decimals - to_decimals));
		value / factor
	} else {
		value
	}
}

impl ValueConverter for DecimalConverter {
	fn convert(&self, pair_id: &str, origin_value: U256, direction: ConvertDirection) -> U256 {
		let Some(pair) = self.registry.pair_config(pair_id) else {
			return origin_value;
		};

		match direction {
			ConvertDirection::IntoDestination => {
				rescale(origin_value, pair.source_decimals, pair.destination_decimals)
			}
			ConvertDirection::OutOfDestination => {
				rescale(origin_value, pair.destination_decimals, pair.source_decimals)
			}
		}
	}
}

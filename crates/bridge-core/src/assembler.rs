//! Final transaction assembly.

use crate::{payload::StagedPayload, resolver::ResolvedParams};
use bridge_types::{Address, BuildIntent, Transaction};
use tracing::info;

/// Combines resolved parameters and the staged payload into a transaction.
///
/// Emits one `build tx` event describing the result.
pub fn assemble(
	intent: &BuildIntent,
	sender: Address,
	identifier: Option<&str>,
	params: ResolvedParams,
	staged: StagedPayload,
) -> Transaction {
	let tx = Transaction {
		to: staged.to,
		value: staged.value,
		nonce: params.nonce,
		gas_limit: params.gas_limit,
		gas_price: params.gas_price,
		input: staged.input,
	};

	info!(
		pair_id = %intent.pair_id,
		swap_id = %intent.swap_id,
		swap_type = %intent.swap_type,
		identifier = identifier.unwrap_or_default(),
		from = %sender,
		to = %tx.to,
		bind = %intent.bind,
		origin_value = %intent.origin_value,
		value = %tx.value,
		nonce = tx.nonce,
		gas_limit = tx.gas_limit,
		gas_price = %tx.gas_price,
		input = %tx.input,
		"build tx"
	);

	tx
}

#[cfg(test)]
mod tests {
	use super::*;
	use bridge_types::{Bytes, U256};

	#[test]
	fn test_assemble_copies_fields() {
		let intent = BuildIntent::swap_in("usdt", "0x01", "0x33", U256::from(2));
		let params = ResolvedParams {
			nonce: 4,
			gas_price: U256::from(110),
			gas_limit: 90_000,
		};
		let staged = StagedPayload {
			to: Address::repeat_byte(0x22),
			input: Bytes::from(vec![1, 2, 3]),
			value: U256::ZERO,
		};

		let tx = assemble(
			&intent,
			Address::repeat_byte(0x11),
			Some("fsn-eth"),
			params,
			staged,
		);
		assert_eq!(tx.to, Address::repeat_byte(0x22));
		assert_eq!(tx.nonce, 4);
		assert_eq!(tx.gas_price, U256::from(110));
		assert_eq!(tx.gas_limit, 90_000);
		assert_eq!(tx.input, Bytes::from(vec![1, 2, 3]));
		assert_eq!(tx.value, U256::ZERO);
	}
}

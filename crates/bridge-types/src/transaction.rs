//! The unsigned transaction record produced by the builder.

use crate::{chains::ChainId, common::*, errors::BuildError};
use alloy::primitives::TxKind;
use alloy::rpc::types::{TransactionInput, TransactionRequest};
use serde::{Deserialize, Serialize};

/// Legacy EVM transaction, ready to be handed to an external signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
	pub to: Address,
	pub value: U256,
	pub nonce: u64,
	pub gas_limit: u64,
	pub gas_price: U256,
	pub input: Bytes,
}

impl Transaction {
	/// Converts into an alloy request signed by `from` on `chain_id`.
	///
	/// Fails when the gas price does not fit the 128-bit field used by
	/// legacy transactions.
	pub fn to_request(
		&self,
		from: Address,
		chain_id: ChainId,
	) -> Result<TransactionRequest, BuildError> {
		let gas_price = u128::try_from(self.gas_price).map_err(|_| {
			BuildError::Encoding(format!("gas price {} overflows u128", self.gas_price))
		})?;

		Ok(TransactionRequest {
			from: Some(from),
			to: Some(TxKind::Call(self.to)),
			value: Some(self.value),
			nonce: Some(self.nonce),
			gas: Some(self.gas_limit),
			gas_price: Some(gas_price),
			chain_id: Some(chain_id.0),
			transaction_type: Some(0),
			input: TransactionInput::new(self.input.clone()),
			..Default::default()
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Transaction {
		Transaction {
			to: Address::repeat_byte(0x22),
			value: U256::from(1000),
			nonce: 5,
			gas_limit: 90_000,
			gas_price: U256::from(20_000_000_000u64),
			input: Bytes::from(vec![1, 2, 3]),
		}
	}

	#[test]
	fn test_to_request() {
		let from = Address::repeat_byte(0x11);
		let request = sample().to_request(from, ChainId::ETHEREUM).unwrap();

		assert_eq!(request.from, Some(from));
		assert_eq!(request.to, Some(TxKind::Call(Address::repeat_byte(0x22))));
		assert_eq!(request.nonce, Some(5));
		assert_eq!(request.gas, Some(90_000));
		assert_eq!(request.gas_price, Some(20_000_000_000u128));
		assert_eq!(request.chain_id, Some(1));
		assert_eq!(request.input.input, Some(Bytes::from(vec![1, 2, 3])));
	}

	#[test]
	fn test_to_request_rejects_oversized_gas_price() {
		let mut tx = sample();
		tx.gas_price = U256::MAX;
		assert!(matches!(
			tx.to_request(Address::ZERO, ChainId::ETHEREUM),
			Err(BuildError::Encoding(_))
		));
	}
}

//! Test doubles shared by the builder tests.

use async_trait::async_trait;
use bridge_types::{
	Address, ChainGateway, ConvertDirection, GatewayError, NonceSequencer, PairConfig,
	RpcOperation, ValueConverter, U256,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

pub const CUSTODIAL: Address = Address::new([0x11; 20]);
pub const TOKEN: Address = Address::new([0x22; 20]);

/// Gateway answering fixed values and recording every call.
///
/// Only `token_holder` owns tokens; every other owner reads zero.
pub struct MockGateway {
	pub balance: U256,
	pub token_holder: Address,
	pub token_balance: U256,
	pub gas_price: U256,
	pub pending_nonce: u64,
	pub failing: HashSet<RpcOperation>,
	pub call_log: Mutex<Vec<RpcOperation>>,
}

impl Default for MockGateway {
	fn default() -> Self {
		Self {
			balance: U256::from(10u64).pow(U256::from(18)),
			token_holder: CUSTODIAL,
			token_balance: U256::MAX,
			gas_price: U256::from(100),
			pending_nonce: 7,
			failing: HashSet::new(),
			call_log: Mutex::new(Vec::new()),
		}
	}
}

impl MockGateway {
	pub fn calls(&self) -> Vec<RpcOperation> {
		self.call_log.lock().unwrap().clone()
	}

	fn record(&self, operation: RpcOperation) -> Result<(), GatewayError> {
		self.call_log.lock().unwrap().push(operation);
		if self.failing.contains(&operation) {
			Err(GatewayError::Transport(format!("{} unavailable", operation)))
		} else {
			Ok(())
		}
	}
}

#[async_trait]
impl ChainGateway for MockGateway {
	async fn get_balance(&self, _address: Address) -> Result<U256, GatewayError> {
		self.record(RpcOperation::Balance).map(|_| self.balance)
	}

	async fn get_token_balance(
		&self,
		_token: Address,
		owner: Address,
	) -> Result<U256, GatewayError> {
		self.record(RpcOperation::TokenBalance).map(|_| {
			if owner == self.token_holder {
				self.token_balance
			} else {
				U256::ZERO
			}
		})
	}

	async fn suggest_gas_price(&self) -> Result<U256, GatewayError> {
		self.record(RpcOperation::GasPrice).map(|_| self.gas_price)
	}

	async fn get_pending_nonce(&self, _address: Address) -> Result<u64, GatewayError> {
		self.record(RpcOperation::PendingNonce)
			.map(|_| self.pending_nonce)
	}
}

/// Sequencer that adds a fixed offset and counts calls.
#[derive(Default)]
pub struct CountingSequencer {
	pub offset: u64,
	pub calls: AtomicU32,
}

#[async_trait]
impl NonceSequencer for CountingSequencer {
	async fn next_nonce(&self, _pair_id: &str, _signer: Address, observed: u64) -> u64 {
		self.calls.fetch_add(1, Ordering::SeqCst);
		observed + self.offset
	}
}

/// Doubles amounts going into the destination chain and halves amounts
/// coming out of it.
pub struct ScalingConverter;

impl ValueConverter for ScalingConverter {
	fn convert(&self, _pair_id: &str, origin_value: U256, direction: ConvertDirection) -> U256 {
		match direction {
			ConvertDirection::IntoDestination => origin_value * U256::from(2),
			ConvertDirection::OutOfDestination => origin_value / U256::from(2),
		}
	}
}

pub fn pair(pair_id: &str, contract: Option<Address>) -> PairConfig {
	PairConfig {
		pair_id: pair_id.to_string(),
		contract_address: contract,
		custodial_address: CUSTODIAL,
		is_token: contract.is_some(),
		gas_price_markup_percent: 0,
		default_gas_limit: 0,
		source_decimals: 18,
		destination_decimals: 18,
	}
}

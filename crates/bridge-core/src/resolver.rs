//! Default gas price, nonce and gas limit resolution.

use bridge_types::{
	Address, BuildError, BuildIntent, ChainGateway, NonceSequencer, PairConfig, Result,
	RpcOperation, U256,
};
use std::sync::Arc;
use tracing::debug;

/// Numeric fields of a transaction, fixed once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedParams {
	pub nonce: u64,
	pub gas_price: U256,
	pub gas_limit: u64,
}

impl ResolvedParams {
	/// Gas price times gas limit.
	pub fn gas_fee(&self) -> U256 {
		self.gas_price.saturating_mul(U256::from(self.gas_limit))
	}
}

/// Raises `price` by `percent`, rounding down.
pub fn apply_markup(price: U256, percent: u64) -> U256 {
	if percent == 0 {
		return price;
	}
	price.saturating_mul(U256::from(100u64) + U256::from(percent)) / U256::from(100u64)
}

/// Fills the numeric fields a caller left unset.
pub struct ParameterResolver {
	gateway: Arc<dyn ChainGateway>,
	sequencer: Arc<dyn NonceSequencer>,
	fallback_gas_limit: u64,
}

impl ParameterResolver {
	pub fn new(
		gateway: Arc<dyn ChainGateway>,
		sequencer: Arc<dyn NonceSequencer>,
		fallback_gas_limit: u64,
	) -> Self {
		Self {
			gateway,
			sequencer,
			fallback_gas_limit,
		}
	}

	/// Resolves the parameters of `intent` sent by `sender`.
	///
	/// Explicit overrides, including zeros, are kept as given.
	pub async fn resolve(
		&self,
		intent: &BuildIntent,
		sender: Address,
		pair: Option<&PairConfig>,
	) -> Result<ResolvedParams> {
		let is_swap = intent.swap_type.is_swap();

		let gas_price = match intent.overrides.gas_price {
			Some(price) => price,
			None => {
				let suggested = self.gateway.suggest_gas_price().await.map_err(|source| {
					BuildError::TransientRpc {
						operation: RpcOperation::GasPrice,
						source,
					}
				})?;
				match pair {
					Some(pair) if is_swap => {
						let price = apply_markup(suggested, pair.gas_price_markup_percent);
						debug!(
							pair_id = %pair.pair_id,
							%suggested,
							markup = pair.gas_price_markup_percent,
							%price,
							"Applied gas price markup"
						);
						price
					}
					_ => suggested,
				}
			}
		};

		let nonce = match intent.overrides.nonce {
			Some(nonce) => nonce,
			None => {
				let pending = self.gateway.get_pending_nonce(sender).await.map_err(|source| {
					BuildError::TransientRpc {
						operation: RpcOperation::PendingNonce,
						source,
					}
				})?;
				match pair {
					Some(pair) if is_swap && pair.is_custodial(&sender) => {
						self.sequencer
							.next_nonce(&pair.pair_id, sender, pending)
							.await
					}
					_ => pending,
				}
			}
		};

		let gas_limit = intent.overrides.gas_limit.unwrap_or_else(|| {
			pair.map(|p| p.default_gas_limit)
				.filter(|limit| *limit > 0)
				.unwrap_or(self.fallback_gas_limit)
		});

		Ok(ResolvedParams {
			nonce,
			gas_price,
			gas_limit,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mocks::{pair, CountingSequencer, MockGateway, CUSTODIAL, TOKEN};
	use bridge_types::{GasOverrides, DEFAULT_GAS_LIMIT};
	use std::sync::atomic::Ordering;

	const BIND: &str = "0x3333333333333333333333333333333333333333";

	fn resolver(
		gateway: MockGateway,
		sequencer: Arc<CountingSequencer>,
	) -> ParameterResolver {
		ParameterResolver::new(Arc::new(gateway), sequencer, DEFAULT_GAS_LIMIT)
	}

	#[test]
	fn test_apply_markup() {
		assert_eq!(apply_markup(U256::from(100), 10), U256::from(110));
		assert_eq!(apply_markup(U256::from(99), 10), U256::from(108));
		assert_eq!(apply_markup(U256::from(99), 0), U256::from(99));
		assert_eq!(apply_markup(U256::MAX, 0), U256::MAX);
	}

	#[tokio::test]
	async fn test_markup_only_for_swaps() {
		let mut usdt = pair("usdt", Some(TOKEN));
		usdt.gas_price_markup_percent = 10;
		let sequencer = Arc::new(CountingSequencer::default());
		let resolver = resolver(MockGateway::default(), sequencer);

		let swap = BuildIntent::swap_in("usdt", "0x01", BIND, U256::from(1));
		let params = resolver.resolve(&swap, CUSTODIAL, Some(&usdt)).await.unwrap();
		assert_eq!(params.gas_price, U256::from(110));

		let transfer = BuildIntent::transfer(CUSTODIAL, TOKEN, U256::ZERO).with_pair("usdt");
		let params = resolver
			.resolve(&transfer, CUSTODIAL, Some(&usdt))
			.await
			.unwrap();
		assert_eq!(params.gas_price, U256::from(100));
	}

	#[tokio::test]
	async fn test_explicit_overrides_are_kept() {
		let sequencer = Arc::new(CountingSequencer::default());
		let gateway = Arc::new(MockGateway::default());
		let resolver = ParameterResolver::new(gateway.clone(), sequencer.clone(), DEFAULT_GAS_LIMIT);

		let intent = BuildIntent::swap_in("usdt", "0x01", BIND, U256::from(1)).with_overrides(
			GasOverrides {
				gas_price: Some(U256::ZERO),
				nonce: Some(0),
				gas_limit: Some(0),
			},
		);
		let params = resolver
			.resolve(&intent, CUSTODIAL, Some(&pair("usdt", Some(TOKEN))))
			.await
			.unwrap();

		assert_eq!(
			params,
			ResolvedParams {
				nonce: 0,
				gas_price: U256::ZERO,
				gas_limit: 0,
			}
		);
		assert!(gateway.calls().is_empty());
		assert_eq!(sequencer.calls.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn test_custodial_swap_nonce_is_sequenced_once() {
		let sequencer = Arc::new(CountingSequencer {
			offset: 3,
			..Default::default()
		});
		let resolver = resolver(MockGateway::default(), sequencer.clone());
		let intent = BuildIntent::swap_out("eth", "0x01", BIND, U256::from(1));

		let params = resolver
			.resolve(&intent, CUSTODIAL, Some(&pair("eth", None)))
			.await
			.unwrap();
		assert_eq!(params.nonce, 10);
		assert_eq!(sequencer.calls.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn test_other_senders_use_pending_nonce() {
		let sequencer = Arc::new(CountingSequencer {
			offset: 3,
			..Default::default()
		});
		let resolver = resolver(MockGateway::default(), sequencer.clone());
		let other = Address::repeat_byte(0x55);

		let swap = BuildIntent::swap_out("eth", "0x01", BIND, U256::from(1)).with_from(other);
		let params = resolver
			.resolve(&swap, other, Some(&pair("eth", None)))
			.await
			.unwrap();
		assert_eq!(params.nonce, 7);

		// Plain transfers from the custodial address are not sequenced either
		let transfer = BuildIntent::transfer(CUSTODIAL, other, U256::ZERO).with_pair("eth");
		let params = resolver
			.resolve(&transfer, CUSTODIAL, Some(&pair("eth", None)))
			.await
			.unwrap();
		assert_eq!(params.nonce, 7);
		assert_eq!(sequencer.calls.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn test_gas_limit_defaults() {
		let sequencer = Arc::new(CountingSequencer::default());
		let resolver = resolver(MockGateway::default(), sequencer);
		let intent = BuildIntent::swap_out("eth", "0x01", BIND, U256::from(1));

		let mut eth = pair("eth", None);
		let params = resolver.resolve(&intent, CUSTODIAL, Some(&eth)).await.unwrap();
		assert_eq!(params.gas_limit, DEFAULT_GAS_LIMIT);

		eth.default_gas_limit = 21_000;
		let params = resolver.resolve(&intent, CUSTODIAL, Some(&eth)).await.unwrap();
		assert_eq!(params.gas_limit, 21_000);
		assert_eq!(params.gas_fee(), U256::from(100u64 * 21_000));
	}

	#[tokio::test]
	async fn test_gas_price_failure_is_transient() {
		let gateway = MockGateway {
			failing: [RpcOperation::GasPrice].into(),
			..Default::default()
		};
		let resolver = resolver(gateway, Arc::new(CountingSequencer::default()));
		let intent = BuildIntent::transfer(CUSTODIAL, TOKEN, U256::ZERO);

		let err = resolver.resolve(&intent, CUSTODIAL, None).await.unwrap_err();
		assert!(matches!(
			err,
			BuildError::TransientRpc {
				operation: RpcOperation::GasPrice,
				..
			}
		));
		assert!(err.is_transient());
	}
}

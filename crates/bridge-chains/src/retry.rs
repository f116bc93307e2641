//! Retry logic for chain queries.
//!
//! Every read the builder makes goes through a `RetryPolicy`: a bounded
//! number of attempts separated by a constant delay. The policy is an
//! immutable value handed in at construction; nothing here is global.

use async_trait::async_trait;
use backoff::backoff::{Backoff, Constant};
use bridge_types::{Address, ChainGateway, GatewayError, RpcOperation, U256};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Attempts made before a call is reported as failed.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Delay between two attempts of the same call.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Bounded, constant-delay retry policy.
///
/// The calling task is blocked for the full interval between attempts and
/// the policy offers no cancellation; callers needing a latency bound wrap
/// the call in their own timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
	max_attempts: u32,
	interval: Duration,
}

impl Default for RetryPolicy {
	fn default() -> Self {
		Self {
			max_attempts: DEFAULT_MAX_ATTEMPTS,
			interval: DEFAULT_RETRY_INTERVAL,
		}
	}
}

impl RetryPolicy {
	/// Creates a policy; at least one attempt is always made.
	pub fn new(max_attempts: u32, interval: Duration) -> Self {
		Self {
			max_attempts: max_attempts.max(1),
			interval,
		}
	}

	pub fn max_attempts(&self) -> u32 {
		self.max_attempts
	}

	pub fn interval(&self) -> Duration {
		self.interval
	}

	/// Runs `call` until it succeeds or the attempts are exhausted.
	///
	/// Returns the first success immediately. On exhaustion the error of
	/// the last attempt is returned unmodified.
	pub async fn retry<T, E, F, Fut>(&self, operation: RpcOperation, mut call: F) -> Result<T, E>
	where
		F: FnMut() -> Fut,
		Fut: Future<Output = Result<T, E>>,
		E: Display,
	{
		let mut backoff = Constant::new(self.interval);
		let mut attempts = 0;

		loop {
			attempts += 1;

			match call().await {
				Ok(result) => {
					if attempts > 1 {
						debug!(%operation, attempts, "RPC call succeeded after retry");
					}
					return Ok(result);
				}
				Err(e) => {
					if attempts >= self.max_attempts {
						warn!(
							%operation,
							"RPC call failed after {} attempts, giving up: {}",
							attempts, e
						);
						return Err(e);
					}

					let delay = backoff.next_backoff().unwrap_or(self.interval);
					warn!(
						%operation,
						"RPC call failed, attempt {}/{}, retrying in {:?}: {}",
						attempts, self.max_attempts, delay, e
					);
					tokio::time::sleep(delay).await;
				}
			}
		}
	}
}

/// Gateway wrapper that applies a `RetryPolicy` to every query.
#[derive(Clone)]
pub struct RetryingGateway {
	inner: Arc<dyn ChainGateway>,
	policy: RetryPolicy,
}

impl RetryingGateway {
	pub fn new(inner: Arc<dyn ChainGateway>, policy: RetryPolicy) -> Self {
		Self { inner, policy }
	}

	pub fn policy(&self) -> RetryPolicy {
		self.policy
	}
}

#[async_trait]
impl ChainGateway for RetryingGateway {
	async fn get_balance(&self, address: Address) -> Result<U256, GatewayError> {
		let inner = self.inner.as_ref();
		self.policy
			.retry(RpcOperation::Balance, move || inner.get_balance(address))
			.await
	}

	async fn get_token_balance(
		&self,
		token: Address,
		owner: Address,
	) -> Result<U256, GatewayError> {
		let inner = self.inner.as_ref();
		self.policy
			.retry(RpcOperation::TokenBalance, move || {
				inner.get_token_balance(token, owner)
			})
			.await
	}

	async fn suggest_gas_price(&self) -> Result<U256, GatewayError> {
		let inner = self.inner.as_ref();
		self.policy
			.retry(RpcOperation::GasPrice, move || inner.suggest_gas_price())
			.await
	}

	async fn get_pending_nonce(&self, address: Address) -> Result<u64, GatewayError> {
		let inner = self.inner.as_ref();
		self.policy
			.retry(RpcOperation::PendingNonce, move || {
				inner.get_pending_nonce(address)
			})
			.await
	}
}

//! Preflight check that the sender can pay for a transaction.

use bridge_types::{Address, BalanceAsset, BuildError, ChainGateway, Result, U256};
use std::sync::Arc;
use tracing::debug;

pub struct BalanceVerifier {
	gateway: Arc<dyn ChainGateway>,
}

impl BalanceVerifier {
	pub fn new(gateway: Arc<dyn ChainGateway>) -> Self {
		Self { gateway }
	}

	/// Fails unless the native balance of `sender` covers `value + fee`.
	pub async fn verify(&self, sender: Address, value: U256, fee: U256) -> Result<()> {
		let need = value.saturating_add(fee);

		let have = self
			.gateway
			.get_balance(sender)
			.await
			.map_err(|source| BuildError::BalanceQuery {
				address: sender,
				source,
			})?;

		if have < need {
			return Err(BuildError::InsufficientBalance {
				asset: BalanceAsset::Coin,
				address: sender,
				have,
				need,
			});
		}

		debug!(%sender, %have, %need, "Balance check passed");
		Ok(())
	}
}

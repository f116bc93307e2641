//! Direction-specific call data and recipient selection.

use crate::abi::{encode_swapin, encode_transfer};
use bridge_types::{
	common::{parse_address, swap_id_hash, unlock_memo},
	Address, BalanceAsset, BuildError, BuildIntent, Bytes, ChainGateway, ConvertDirection,
	PairConfig, Result, RpcOperation, SwapType, ValueConverter, B256, U256,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Recipient, call data and value staged for one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedPayload {
	pub to: Address,
	pub input: Bytes,
	pub value: U256,
}

/// Builds the payload for each swap direction.
pub struct PayloadBuilder {
	gateway: Arc<dyn ChainGateway>,
	converter: Arc<dyn ValueConverter>,
}

impl PayloadBuilder {
	pub fn new(gateway: Arc<dyn ChainGateway>, converter: Arc<dyn ValueConverter>) -> Self {
		Self { gateway, converter }
	}

	/// Stages the payload of `intent`.
	///
	/// `pair` must be present for swap directions. Token swap-outs check the
	/// pair's custodial token balance, whoever sends the transaction.
	pub async fn build(
		&self,
		intent: &BuildIntent,
		pair: Option<&PairConfig>,
	) -> Result<StagedPayload> {
		match (intent.swap_type, pair) {
			(SwapType::None, _) => Self::build_plain(intent),
			(_, None) => Err(BuildError::UnknownPair(intent.pair_id.clone())),
			(SwapType::SwapIn, Some(pair)) => self.build_swapin(intent, pair),
			(SwapType::SwapOut, Some(pair)) if pair.is_token => {
				self.build_token_swapout(intent, pair).await
			}
			(SwapType::SwapOut, Some(_)) => self.build_native_swapout(intent),
		}
	}

	fn build_plain(intent: &BuildIntent) -> Result<StagedPayload> {
		let to = intent.to.ok_or_else(|| {
			BuildError::Validation("Transfer requires a recipient address".to_string())
		})?;

		Ok(StagedPayload {
			to,
			input: intent.input.clone().unwrap_or_default(),
			value: intent.value.unwrap_or_default(),
		})
	}

	fn build_swapin(&self, intent: &BuildIntent, pair: &PairConfig) -> Result<StagedPayload> {
		let txhash = parse_swap_id(intent)?;
		let account = parse_bind(intent)?;
		let to = token_contract(pair)?;
		let amount = self.converter.convert(
			&intent.pair_id,
			intent.origin_value,
			ConvertDirection::IntoDestination,
		);

		debug!(
			pair_id = %intent.pair_id,
			swap_id = %intent.swap_id,
			%account,
			%amount,
			"Encoding Swapin call"
		);

		Ok(StagedPayload {
			to,
			input: encode_swapin(txhash, account, amount),
			value: intent.value.unwrap_or_default(),
		})
	}

	async fn build_token_swapout(
		&self,
		intent: &BuildIntent,
		pair: &PairConfig,
	) -> Result<StagedPayload> {
		let custodial = pair.custodial_address;
		let receiver = parse_bind(intent)?;
		let token = token_contract(pair)?;
		let amount = self.converter.convert(
			&intent.pair_id,
			intent.origin_value,
			ConvertDirection::OutOfDestination,
		);

		let balance = self
			.gateway
			.get_token_balance(token, custodial)
			.await
			.map_err(|source| BuildError::TransientRpc {
				operation: RpcOperation::TokenBalance,
				source,
			})?;

		if balance < amount {
			return Err(BuildError::InsufficientBalance {
				asset: BalanceAsset::Token,
				address: custodial,
				have: balance,
				need: amount,
			});
		}

		debug!(
			pair_id = %intent.pair_id,
			swap_id = %intent.swap_id,
			%receiver,
			%amount,
			%balance,
			"Encoding token transfer"
		);

		Ok(StagedPayload {
			to: token,
			input: encode_transfer(receiver, amount),
			value: intent.value.unwrap_or_default(),
		})
	}

	fn build_native_swapout(&self, intent: &BuildIntent) -> Result<StagedPayload> {
		let receiver = parse_bind(intent)?;
		let value = self.converter.convert(
			&intent.pair_id,
			intent.origin_value,
			ConvertDirection::OutOfDestination,
		);

		Ok(StagedPayload {
			to: receiver,
			input: unlock_memo(&intent.swap_id),
			value,
		})
	}
}

fn parse_swap_id(intent: &BuildIntent) -> Result<B256> {
	if intent.swap_id.trim().is_empty() {
		return Err(BuildError::Validation("Swap id must not be empty".to_string()));
	}
	swap_id_hash(&intent.swap_id)
		.ok_or_else(|| BuildError::Validation(format!("Swap id is not hex: {}", intent.swap_id)))
}

fn parse_bind(intent: &BuildIntent) -> Result<Address> {
	match parse_address(&intent.bind) {
		Some(address) if !address.is_zero() => Ok(address),
		_ => {
			warn!(
				pair_id = %intent.pair_id,
				swap_id = %intent.swap_id,
				bind = %intent.bind,
				"Rejected bind address"
			);
			Err(BuildError::Validation(format!(
				"Wrong bind address: {:?}",
				intent.bind
			)))
		}
	}
}

fn token_contract(pair: &PairConfig) -> Result<Address> {
	pair.token_contract().ok_or_else(|| {
		BuildError::Config(format!("Pair {} has no token contract", pair.pair_id))
	})
}

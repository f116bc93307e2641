//! Wiring from configuration to a ready transaction builder.

use anyhow::{Context, Result};
use bridge_account::InMemoryNonceSequencer;
use bridge_chains::{AlloyGateway, RetryingGateway};
use bridge_config::BridgeConfig;
use bridge_core::{BuilderSettings, TransactionBuilder};
use bridge_types::{
	Address, BuildIntent, ChainId, DecimalConverter, PairRegistry, SwapType, Transaction,
};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Built transaction as handed to the external signer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltTransaction {
	pub chain_id: ChainId,
	pub from: Address,
	pub transaction: Transaction,
}

pub struct BridgeService {
	chain_id: ChainId,
	gateway: Arc<AlloyGateway>,
	registry: Arc<dyn PairRegistry>,
	builder: TransactionBuilder,
}

impl BridgeService {
	/// Creates the service described by `config`.
	///
	/// No network request is made.
	pub fn from_config(config: &BridgeConfig) -> Result<Self> {
		let chain_id = config.bridge.chain_id;
		let gateway = Arc::new(
			AlloyGateway::new(&config.bridge.rpc_url, chain_id)
				.context("Failed to create chain gateway")?,
		);
		let registry: Arc<dyn PairRegistry> = Arc::new(config.pair_registry()?);

		let mut settings = BuilderSettings::new(config.role()?)
			.with_reserve_fee(config.reserve_fee()?)
			.with_default_gas_limit(config.gas.default_gas_limit);
		if let Some(identifier) = &config.bridge.identifier {
			settings = settings.with_identifier(identifier.clone());
		}

		let builder = TransactionBuilder::new(
			RetryingGateway::new(gateway.clone(), config.retry_policy()),
			registry.clone(),
			Arc::new(InMemoryNonceSequencer::new()),
			Arc::new(DecimalConverter::new(registry.clone())),
			settings,
		);

		info!(
			name = %config.bridge.name,
			%chain_id,
			role = %config.bridge.role,
			pairs = config.pairs.len(),
			"Bridge service ready"
		);

		Ok(Self {
			chain_id,
			gateway,
			registry,
			builder,
		})
	}

	pub fn builder(&self) -> &TransactionBuilder {
		&self.builder
	}

	/// Checks that the RPC endpoint serves the configured chain.
	pub async fn check_endpoint(&self) -> Result<()> {
		self.gateway
			.verify_chain_id()
			.await
			.context("RPC endpoint check failed")
	}

	/// Builds `intent` and attaches the sender and chain id.
	pub async fn build(&self, intent: &BuildIntent) -> Result<BuiltTransaction> {
		let from = self.sender_of(intent);
		let transaction = self.builder.build_transaction(intent).await?;

		// Reject gas prices the legacy envelope cannot carry
		transaction.to_request(from, self.chain_id)?;

		Ok(BuiltTransaction {
			chain_id: self.chain_id,
			from,
			transaction,
		})
	}

	fn sender_of(&self, intent: &BuildIntent) -> Address {
		match (intent.from, intent.swap_type) {
			(Some(from), _) => from,
			(None, SwapType::None) => Address::ZERO,
			(None, _) => self
				.registry
				.pair_config(&intent.pair_id)
				.map(|pair| pair.custodial_address)
				.unwrap_or_default(),
		}
	}
}

/// Reads a JSON build intent from `path`, or from stdin when `path` is `-`.
pub fn read_intent(path: &Path) -> Result<BuildIntent> {
	let contents = if path == Path::new("-") {
		let mut buf = String::new();
		std::io::stdin()
			.read_to_string(&mut buf)
			.context("Failed to read intent from stdin")?;
		buf
	} else {
		std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read intent file: {:?}", path))?
	};

	serde_json::from_str(&contents).context("Failed to parse intent JSON")
}

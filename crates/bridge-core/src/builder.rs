//! The transaction builder entry point.

use crate::{
	assembler::assemble, balance::BalanceVerifier, payload::PayloadBuilder,
	resolver::ParameterResolver,
};
use bridge_chains::RetryingGateway;
use bridge_types::{
	Address, BuildError, BuildIntent, ChainGateway, EndpointRole, NonceSequencer, PairConfig,
	PairRegistry, Result, Transaction, ValueConverter, DEFAULT_GAS_LIMIT, DEFAULT_RESERVE_FEE,
	U256,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Endpoint-wide settings of a `TransactionBuilder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderSettings {
	pub role: EndpointRole,
	/// Fee reserved by the balance check of swap transactions.
	pub reserve_fee: U256,
	pub default_gas_limit: u64,
	/// Tag recorded with swap transactions that carry none.
	pub identifier: Option<String>,
}

impl BuilderSettings {
	pub fn new(role: EndpointRole) -> Self {
		Self {
			role,
			reserve_fee: DEFAULT_RESERVE_FEE,
			default_gas_limit: DEFAULT_GAS_LIMIT,
			identifier: None,
		}
	}

	pub fn with_reserve_fee(mut self, reserve_fee: U256) -> Self {
		self.reserve_fee = reserve_fee;
		self
	}

	pub fn with_default_gas_limit(mut self, gas_limit: u64) -> Self {
		self.default_gas_limit = gas_limit;
		self
	}

	pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
		self.identifier = Some(identifier.into());
		self
	}
}

/// Builds unsigned, balance-checked transactions from build intents.
///
/// Every chain read goes through the retrying gateway given at
/// construction. Builds are independent and may run concurrently; the
/// nonce sequencer is the only state they share.
pub struct TransactionBuilder {
	settings: BuilderSettings,
	registry: Arc<dyn PairRegistry>,
	payloads: PayloadBuilder,
	resolver: ParameterResolver,
	verifier: BalanceVerifier,
}

impl TransactionBuilder {
	pub fn new(
		gateway: RetryingGateway,
		registry: Arc<dyn PairRegistry>,
		sequencer: Arc<dyn NonceSequencer>,
		converter: Arc<dyn ValueConverter>,
		settings: BuilderSettings,
	) -> Self {
		let gateway: Arc<dyn ChainGateway> = Arc::new(gateway);

		Self {
			payloads: PayloadBuilder::new(gateway.clone(), converter),
			resolver: ParameterResolver::new(
				gateway.clone(),
				sequencer,
				settings.default_gas_limit,
			),
			verifier: BalanceVerifier::new(gateway),
			registry,
			settings,
		}
	}

	pub fn settings(&self) -> &BuilderSettings {
		&self.settings
	}

	/// Builds one transaction for `intent`.
	///
	/// The intent is only read. On error nothing is returned besides the
	/// error, though a nonce handed out by the sequencer stays consumed.
	#[instrument(skip_all, fields(pair_id = %intent.pair_id, swap_id = %intent.swap_id, swap_type = %intent.swap_type))]
	pub async fn build_transaction(&self, intent: &BuildIntent) -> Result<Transaction> {
		let swap_type = intent.swap_type;

		if swap_type.is_swap() && intent.input.is_some() {
			return Err(BuildError::Validation(format!(
				"Raw input is not allowed for {} transactions",
				swap_type
			)));
		}

		let pair = self.lookup_pair(intent)?;

		if !self.settings.role.permits(swap_type) {
			return Err(BuildError::WrongEndpoint {
				swap_type,
				role: self.settings.role,
			});
		}

		let sender = Self::sender(intent, pair.as_ref())?;
		let staged = self.payloads.build(intent, pair.as_ref()).await?;
		let params = self.resolver.resolve(intent, sender, pair.as_ref()).await?;

		let fee = if swap_type.is_swap() {
			self.settings.reserve_fee
		} else {
			params.gas_fee()
		};
		self.verifier.verify(sender, staged.value, fee).await?;

		let identifier = self.identifier_for(intent);

		Ok(assemble(intent, sender, identifier, params, staged))
	}

	/// Identifier recorded with `intent`: its own, else the endpoint's for swaps.
	fn identifier_for<'a>(&'a self, intent: &'a BuildIntent) -> Option<&'a str> {
		intent.identifier.as_deref().or_else(|| {
			intent
				.swap_type
				.is_swap()
				.then_some(self.settings.identifier.as_deref())
				.flatten()
		})
	}

	fn lookup_pair(&self, intent: &BuildIntent) -> Result<Option<PairConfig>> {
		if intent.swap_type.is_swap() {
			return self
				.registry
				.pair_config(&intent.pair_id)
				.map(Some)
				.ok_or_else(|| BuildError::UnknownPair(intent.pair_id.clone()));
		}

		if intent.pair_id.is_empty() {
			return Ok(None);
		}

		let pair = self.registry.pair_config(&intent.pair_id);
		if pair.is_none() {
			debug!(pair_id = %intent.pair_id, "Unknown pair on plain transfer, using defaults");
		}
		Ok(pair)
	}

	fn sender(intent: &BuildIntent, pair: Option<&PairConfig>) -> Result<Address> {
		match (intent.from, pair) {
			(Some(from), _) => Ok(from),
			(None, Some(pair)) if intent.swap_type.is_swap() => Ok(pair.custodial_address),
			_ => Err(BuildError::Validation(
				"Transfer requires a sender address".to_string(),
			)),
		}
	}
}

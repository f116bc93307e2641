//! Alloy-based EVM chain gateway.
//!
//! Answers balance, gas price and nonce queries over HTTP JSON-RPC. The
//! gateway makes exactly one request per call; retrying belongs to
//! `RetryingGateway`.

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::sol;
use async_trait::async_trait;
use bridge_types::{Address, ChainGateway, ChainId, GatewayError, U256};
use tracing::debug;

sol! {
	/// Read side of an ERC-20 token.
	#[sol(rpc)]
	interface IERC20Balance {
		function balanceOf(address owner) external view returns (uint256);
	}
}

/// EVM chain gateway backed by an alloy HTTP provider.
pub struct AlloyGateway {
	provider: DynProvider,
	chain_id: ChainId,
}

impl AlloyGateway {
	/// Creates a gateway for the RPC endpoint at `rpc_url`.
	///
	/// No request is made here; use `verify_chain_id` to check the endpoint.
	pub fn new(rpc_url: &str, chain_id: ChainId) -> Result<Self, GatewayError> {
		let url = rpc_url
			.parse()
			.map_err(|e| GatewayError::Endpoint(format!("Invalid RPC URL {}: {}", rpc_url, e)))?;

		let provider = ProviderBuilder::new()
			.disable_recommended_fillers()
			.connect_http(url)
			.erased();

		Ok(Self { provider, chain_id })
	}

	pub fn chain_id(&self) -> ChainId {
		self.chain_id
	}

	/// Checks that the endpoint serves the configured chain.
	pub async fn verify_chain_id(&self) -> Result<(), GatewayError> {
		let actual = self
			.provider
			.get_chain_id()
			.await
			.map_err(|e| GatewayError::Transport(format!("Failed to get chain ID: {}", e)))?;

		if actual != self.chain_id.0 {
			return Err(GatewayError::Endpoint(format!(
				"Chain ID mismatch: expected {}, got {}",
				self.chain_id, actual
			)));
		}

		Ok(())
	}
}

#[async_trait]
impl ChainGateway for AlloyGateway {
	async fn get_balance(&self, address: Address) -> Result<U256, GatewayError> {
		debug!("Getting balance for {} on chain {}", address, self.chain_id);

		self.provider
			.get_balance(address)
			.await
			.map_err(|e| GatewayError::Transport(format!("Failed to get balance: {}", e)))
	}

	async fn get_token_balance(
		&self,
		token: Address,
		owner: Address,
	) -> Result<U256, GatewayError> {
		debug!(
			"Getting token {} balance for {} on chain {}",
			token, owner, self.chain_id
		);

		let contract = IERC20Balance::new(token, self.provider.clone());
		contract
			.balanceOf(owner)
			.call()
			.await
			.map_err(|e| GatewayError::Transport(format!("Failed to get token balance: {}", e)))
	}

	async fn suggest_gas_price(&self) -> Result<U256, GatewayError> {
		let price = self
			.provider
			.get_gas_price()
			.await
			.map_err(|e| GatewayError::Transport(format!("Failed to get gas price: {}", e)))?;

		debug!("Suggested gas price on chain {}: {}", self.chain_id, price);
		Ok(U256::from(price))
	}

	async fn get_pending_nonce(&self, address: Address) -> Result<u64, GatewayError> {
		self.provider
			.get_transaction_count(address)
			.pending()
			.await
			.map_err(|e| GatewayError::Transport(format!("Failed to get nonce: {}", e)))
	}
}

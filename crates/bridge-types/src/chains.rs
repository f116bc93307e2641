//! Chain-related types and traits.

use crate::{common::*, intent::SwapType};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl ChainId {
	pub const ETHEREUM: Self = Self(1);
	pub const BSC: Self = Self(56);
	pub const POLYGON: Self = Self(137);
	pub const FUSION: Self = Self(32659);
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for ChainId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Ok(ChainId(s.parse()?))
	}
}

/// Which side of a swap this builder runs on.
///
/// `Source` is the swap's origin chain, where swap-outs are released.
/// `Destination` is the chain where swap-ins are credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointRole {
	Source,
	Destination,
}

impl EndpointRole {
	/// Returns whether a transaction of the given swap type may be built
	/// on this endpoint.
	pub fn permits(&self, swap_type: SwapType) -> bool {
		match swap_type {
			SwapType::None => true,
			SwapType::SwapIn => *self == EndpointRole::Destination,
			SwapType::SwapOut => *self == EndpointRole::Source,
		}
	}
}

impl fmt::Display for EndpointRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EndpointRole::Source => write!(f, "source"),
			EndpointRole::Destination => write!(f, "destination"),
		}
	}
}

impl FromStr for EndpointRole {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"source" | "src" => Ok(EndpointRole::Source),
			"destination" | "dest" | "dst" => Ok(EndpointRole::Destination),
			other => Err(format!("unknown endpoint role: {}", other)),
		}
	}
}

/// Network reads performed while building a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcOperation {
	Balance,
	TokenBalance,
	GasPrice,
	PendingNonce,
}

impl fmt::Display for RpcOperation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			RpcOperation::Balance => "get balance",
			RpcOperation::TokenBalance => "get token balance",
			RpcOperation::GasPrice => "suggest gas price",
			RpcOperation::PendingNonce => "get pending nonce",
		};
		f.write_str(name)
	}
}

/// Errors returned by a chain gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
	#[error("Transport error: {0}")]
	Transport(String),

	#[error("Invalid endpoint: {0}")]
	Endpoint(String),
}

/// Read-only chain queries needed to build a transaction.
///
/// Implementations may fail transiently; retrying is the caller's concern.
#[async_trait]
pub trait ChainGateway: Send + Sync {
	/// Native coin balance of an address.
	async fn get_balance(&self, address: Address) -> Result<U256, GatewayError>;

	/// Token balance of `owner` in the token contract at `token`.
	async fn get_token_balance(&self, token: Address, owner: Address)
		-> Result<U256, GatewayError>;

	/// Node-suggested legacy gas price.
	async fn suggest_gas_price(&self) -> Result<U256, GatewayError>;

	/// Pending-state transaction count of an address.
	async fn get_pending_nonce(&self, address: Address) -> Result<u64, GatewayError>;
}

//! Error types for transaction building.

use crate::{
	chains::{EndpointRole, GatewayError, RpcOperation},
	common::{Address, U256},
	intent::SwapType,
};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

/// Balance a preflight check ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceAsset {
	Coin,
	Token,
}

impl fmt::Display for BalanceAsset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BalanceAsset::Coin => write!(f, "coin"),
			BalanceAsset::Token => write!(f, "token"),
		}
	}
}

#[derive(Error, Debug)]
pub enum BuildError {
	#[error("Unknown pair id: {0}")]
	UnknownPair(String),

	#[error("Configuration error: {0}")]
	Config(String),

	#[error("Cannot build {swap_type} transaction on {role} endpoint")]
	WrongEndpoint {
		swap_type: SwapType,
		role: EndpointRole,
	},

	#[error("Validation error: {0}")]
	Validation(String),

	#[error("RPC {operation} failed after retries: {source}")]
	TransientRpc {
		operation: RpcOperation,
		#[source]
		source: GatewayError,
	},

	#[error("Failed to get balance of {address}: {source}")]
	BalanceQuery {
		address: Address,
		#[source]
		source: GatewayError,
	},

	#[error("Not enough {asset} balance of {address}: have {have}, need {need}")]
	InsufficientBalance {
		asset: BalanceAsset,
		address: Address,
		have: U256,
		need: U256,
	},

	#[error("Encoding error: {0}")]
	Encoding(String),
}

impl BuildError {
	/// Whether the failure came from the network rather than the request.
	pub fn is_transient(&self) -> bool {
		matches!(
			self,
			BuildError::TransientRpc { .. } | BuildError::BalanceQuery { .. }
		)
	}
}

//! Call data for the bridge's on-chain entry points.

use alloy::sol;
use alloy::sol_types::SolCall;
use bridge_types::{Address, Bytes, B256, U256};

sol! {
	/// Mint side of a bridged token on the destination chain.
	interface IBridgeToken {
		function Swapin(bytes32 txhash, address account, uint256 amount) external returns (bool);
	}

	/// Standard ERC-20 transfer.
	interface IERC20 {
		function transfer(address to, uint256 amount) external returns (bool);
	}
}

/// Encodes `Swapin(txhash, account, amount)`.
pub fn encode_swapin(txhash: B256, account: Address, amount: U256) -> Bytes {
	IBridgeToken::SwapinCall {
		txhash,
		account,
		amount,
	}
	.abi_encode()
	.into()
}

/// Encodes an ERC-20 `transfer(to, amount)`.
pub fn encode_transfer(to: Address, amount: U256) -> Bytes {
	IERC20::transferCall { to, amount }.abi_encode().into()
}

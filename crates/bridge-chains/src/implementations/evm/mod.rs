//! Ethereum Virtual Machine (EVM) compatible chain gateways.
//!
//! The gateway answers the read-only queries the transaction builder needs:
//! native and token balances, the suggested gas price, and the pending
//! nonce of an account.
//!
//! Available implementations:
//! - `AlloyGateway`: HTTP JSON-RPC via the alloy provider

mod alloy;

pub use self::alloy::AlloyGateway;

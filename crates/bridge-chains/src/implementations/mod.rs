//! Chain gateway implementations for various blockchain networks.
//!
//! Currently supports:
//!
//! - **EVM chains**: Ethereum and EVM-compatible blockchains via the `evm` module

pub mod evm;

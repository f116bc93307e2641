//! Transaction construction and preflight checks for the bridge.
//!
//! `TransactionBuilder::build_transaction` turns a `BuildIntent` into an
//! unsigned legacy transaction in four steps:
//!
//! 1. `payload`: pick the recipient and encode the call data for the swap
//!    direction (Swapin call, ERC-20 transfer or unlock memo)
//! 2. `resolver`: fill gas price, nonce and gas limit left unset
//! 3. `balance`: check the sender can pay value plus fee
//! 4. `assembler`: combine the results and log the built transaction
//!
//! All chain reads go through a `RetryingGateway`.

pub mod abi;
pub mod assembler;
pub mod balance;
pub mod builder;
pub mod payload;
pub mod resolver;

#[cfg(test)]
mod mocks;

pub use balance::BalanceVerifier;
pub use builder::{BuilderSettings, TransactionBuilder};
pub use payload::{PayloadBuilder, StagedPayload};
pub use resolver::{apply_markup, ParameterResolver, ResolvedParams};

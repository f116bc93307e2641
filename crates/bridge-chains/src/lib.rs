//! Chain access for the bridge transaction builder.
//!
//! This crate provides the network side of transaction building: a
//! `ChainGateway` implementation for EVM chains and a retrying wrapper that
//! absorbs transient RPC failures before they reach the builder.
//!
//! # Architecture
//!
//! - `retry`: the retry policy, the generic retrying combinator, and
//!   `RetryingGateway`, which applies the policy to every gateway call
//! - `implementations`: concrete gateways for different chain types

pub mod retry;

pub mod implementations;

pub use implementations::evm::AlloyGateway;
pub use retry::{RetryPolicy, RetryingGateway};

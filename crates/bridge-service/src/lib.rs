//! Command-line front end of the bridge transaction builder.
//!
//! # Components
//!
//! - `cli`: command-line arguments
//! - `service`: wiring from configuration to a ready `TransactionBuilder`

pub mod cli;
pub mod service;

//! Shared types for the bridge transaction builder.
//!
//! This crate defines the vocabulary used by every other crate in the
//! workspace: build intents, pair configuration, the unsigned transaction
//! record, the error taxonomy, and the traits through which the builder
//! talks to its collaborators (chain gateway, nonce sequencer, pair
//! registry and value converter).

pub mod chains;
pub mod common;
pub mod convert;
pub mod errors;
pub mod intent;
pub mod nonce;
pub mod pair;
pub mod transaction;

pub use chains::*;
pub use common::*;
pub use convert::*;
pub use errors::*;
pub use intent::*;
pub use nonce::*;
pub use pair::*;
pub use transaction::*;

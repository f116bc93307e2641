//! Nonce sequencer implementations.

pub mod memory;

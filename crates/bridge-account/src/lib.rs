//! Custodial signer account support.
//!
//! All bridge-originated transactions are sent from one custodial address
//! whose key lives in an external multi-party signing service. The only
//! piece of that account the builder owns is nonce coordination, provided
//! here through `NonceSequencer` implementations.

pub mod implementations;

pub use implementations::memory::InMemoryNonceSequencer;

//! Nonce coordination for the shared custodial signer.

use crate::common::Address;
use async_trait::async_trait;

/// Serializes nonce issuance for a signer shared by concurrent builds.
///
/// Implementations must never hand out the same nonce twice for one signer,
/// and every issued nonce must be greater than all previously issued ones.
#[async_trait]
pub trait NonceSequencer: Send + Sync {
	/// Returns the nonce to use given the chain's pending nonce `observed`.
	async fn next_nonce(&self, pair_id: &str, signer: Address, observed: u64) -> u64;
}

//! In-memory nonce sequencer.

use async_trait::async_trait;
use bridge_types::{Address, NonceSequencer};
use dashmap::{mapref::entry::Entry, DashMap};
use tracing::debug;

/// Process-local nonce sequencer keyed by signer address.
///
/// Issuance for one signer is serialized by the map entry lock, so pairs
/// sharing a custodial address share one sequence across swap-in and
/// swap-out builds.
#[derive(Debug, Default)]
pub struct InMemoryNonceSequencer {
	issued: DashMap<Address, u64>,
}

impl InMemoryNonceSequencer {
	pub fn new() -> Self {
		Self::default()
	}

	fn issue(&self, signer: Address, observed: u64) -> u64 {
		match self.issued.entry(signer) {
			Entry::Occupied(mut entry) => {
				let next = observed.max(entry.get().saturating_add(1));
				entry.insert(next);
				next
			}
			Entry::Vacant(entry) => {
				entry.insert(observed);
				observed
			}
		}
	}
}

#[async_trait]
impl NonceSequencer for InMemoryNonceSequencer {
	async fn next_nonce(&self, pair_id: &str, signer: Address, observed: u64) -> u64 {
		let nonce = self.issue(signer, observed);
		if nonce != observed {
			debug!(
				pair_id,
				%signer,
				observed,
				nonce,
				"Adjusted pending nonce past previously issued nonce"
			);
		}
		nonce
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;
	use std::sync::Arc;

	#[tokio::test]
	async fn test_first_nonce_is_observed() {
		let sequencer = InMemoryNonceSequencer::new();
		let signer = Address::repeat_byte(0x11);

		assert_eq!(sequencer.next_nonce("usdt", signer, 7).await, 7);
		assert_eq!(sequencer.issued.get(&signer).map(|n| *n), Some(7));
	}

	#[tokio::test]
	async fn test_stale_observation_is_bumped() {
		let sequencer = InMemoryNonceSequencer::new();
		let signer = Address::repeat_byte(0x11);

		// The node still reports 7 while earlier builds are unsent
		assert_eq!(sequencer.next_nonce("usdt", signer, 7).await, 7);
		assert_eq!(sequencer.next_nonce("usdt", signer, 7).await, 8);
		assert_eq!(sequencer.next_nonce("eth", signer, 7).await, 9);

		// A chain that moved ahead wins
		assert_eq!(sequencer.next_nonce("usdt", signer, 20).await, 20);
	}

	#[tokio::test]
	async fn test_signers_are_independent() {
		let sequencer = InMemoryNonceSequencer::new();
		let a = Address::repeat_byte(0x11);
		let b = Address::repeat_byte(0x22);

		assert_eq!(sequencer.next_nonce("usdt", a, 3).await, 3);
		assert_eq!(sequencer.next_nonce("usdt", b, 3).await, 3);
		assert_eq!(sequencer.next_nonce("usdt", a, 3).await, 4);
	}

	#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
	async fn test_concurrent_issuance_is_unique_and_increasing() {
		let sequencer = Arc::new(InMemoryNonceSequencer::new());
		let signer = Address::repeat_byte(0x11);

		let tasks = (0..64).map(|i| {
			let sequencer = sequencer.clone();
			let pair = if i % 2 == 0 { "usdt" } else { "eth" };
			tokio::spawn(async move { sequencer.next_nonce(pair, signer, 100).await })
		});

		let nonces: Vec<u64> = futures::future::join_all(tasks)
			.await
			.into_iter()
			.map(|r| r.unwrap())
			.collect();

		let unique: HashSet<u64> = nonces.iter().copied().collect();
		assert_eq!(unique.len(), 64);
		assert_eq!(*unique.iter().min().unwrap(), 100);
		assert_eq!(*unique.iter().max().unwrap(), 163);
		assert_eq!(sequencer.issued.get(&signer).map(|n| *n), Some(163));
	}
}

//! Common types used throughout the bridge.

// Re-export commonly used ethereum types
pub use alloy::primitives::{Address, Bytes, B256, U256};

use std::str::FromStr;

/// Memo prefix carried by native-coin swap-out transactions.
///
/// The destination-side unlock logic matches inbound transfers against
/// this prefix followed by the originating swap id.
pub const UNLOCK_MEMO_PREFIX: &str = "SWAPTX:";

/// Reserve kept for swap transaction fees when checking balances (0.01 ETH).
pub const DEFAULT_RESERVE_FEE: U256 = U256::from_limbs([10_000_000_000_000_000, 0, 0, 0]);

/// Gas limit used when neither the caller nor the pair sets one.
pub const DEFAULT_GAS_LIMIT: u64 = 90_000;

fn strip_hex_prefix(value: &str) -> &str {
	value
		.strip_prefix("0x")
		.or_else(|| value.strip_prefix("0X"))
		.unwrap_or(value)
}

/// Parses a hex address, accepting an optional `0x` prefix.
///
/// The zero address is returned as such; callers decide whether it is
/// acceptable.
pub fn parse_address(value: &str) -> Option<Address> {
	Address::from_str(value.trim()).ok()
}

/// Converts a swap identifier into the 32-byte hash passed on-chain.
///
/// Short identifiers are left-padded with zeros and identifiers longer
/// than 32 bytes keep their trailing 32 bytes. Non-hex input yields `None`.
pub fn swap_id_hash(swap_id: &str) -> Option<B256> {
	let hex_part = strip_hex_prefix(swap_id.trim());
	let bytes = if hex_part.len() % 2 == 1 {
		hex::decode(format!("0{}", hex_part)).ok()?
	} else {
		hex::decode(hex_part).ok()?
	};

	let mut out = [0u8; 32];
	if bytes.len() >= 32 {
		out.copy_from_slice(&bytes[bytes.len() - 32..]);
	} else {
		out[32 - bytes.len()..].copy_from_slice(&bytes);
	}
	Some(B256::from(out))
}

/// Builds the memo payload for a native-coin swap-out.
pub fn unlock_memo(swap_id: &str) -> Bytes {
	Bytes::from(format!("{}{}", UNLOCK_MEMO_PREFIX, swap_id).into_bytes())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_address() {
		let addr = parse_address("0x00000000000000000000000000000000000000aa").unwrap();
		assert_eq!(addr.as_slice()[19], 0xaa);

		// Prefix is optional, surrounding whitespace ignored
		assert_eq!(
			parse_address("00000000000000000000000000000000000000aa"),
			Some(addr)
		);
		assert_eq!(
			parse_address(" 0x00000000000000000000000000000000000000AA\n"),
			Some(addr)
		);

		assert_eq!(
			parse_address("0x0000000000000000000000000000000000000000"),
			Some(Address::ZERO)
		);
		assert!(parse_address("").is_none());
		assert!(parse_address("0x1234").is_none());
		assert!(parse_address("0xzz000000000000000000000000000000000000aa").is_none());
	}

	#[test]
	fn test_swap_id_hash() {
		let full = format!("0x{}", "ab".repeat(32));
		assert_eq!(swap_id_hash(&full), Some(B256::from([0xab; 32])));

		let short = swap_id_hash("0x1").unwrap();
		assert_eq!(short.as_slice()[31], 1);
		assert!(short.as_slice()[..31].iter().all(|b| *b == 0));

		let long = format!("ff{}", "01".repeat(32));
		assert_eq!(swap_id_hash(&long), Some(B256::from([0x01; 32])));

		assert!(swap_id_hash("not-a-hash").is_none());
	}

	#[test]
	fn test_unlock_memo() {
		let memo = unlock_memo("0xdeadbeef");
		assert_eq!(memo.as_ref(), b"SWAPTX:0xdeadbeef");
	}
}

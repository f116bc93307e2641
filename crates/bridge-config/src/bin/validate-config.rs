//! Configuration validation utility
//!
//! Usage: cargo run --bin validate-config config/example.toml

use std::env;
use std::process;

use bridge_config::ConfigLoader;

fn main() {
	let args: Vec<String> = env::args().collect();

	if args.len() != 2 {
		eprintln!("Usage: {} <config-file>", args[0]);
		process::exit(1);
	}

	let config_path = &args[1];

	println!("Validating configuration file: {}", config_path);

	match ConfigLoader::from_file(config_path) {
		Ok(config) => {
			println!("✅ Configuration is valid!");
			println!("Bridge name: {}", config.bridge.name);
			println!("Chain ID: {}", config.bridge.chain_id);
			println!("Role: {}", config.bridge.role);
			println!(
				"Retry: {} attempts, {}ms apart",
				config.retry.max_attempts, config.retry.interval_ms
			);
			let mut pairs: Vec<&String> = config.pairs.keys().collect();
			pairs.sort();
			println!("Pairs configured: {:?}", pairs);
		}
		Err(e) => {
			eprintln!("❌ Configuration validation failed:");
			eprintln!("{:#}", e);
			process::exit(1);
		}
	}
}

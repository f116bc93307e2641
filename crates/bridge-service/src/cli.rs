//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bridge-builder")]
#[command(about = "Bridge transaction builder", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	/// Path to configuration file
	#[arg(short, long, env = "BRIDGE_CONFIG", default_value = "config/bridge.toml")]
	pub config: PathBuf,

	/// Log level override (trace, debug, info, warn, error)
	#[arg(short, long, env = "BRIDGE_LOG_LEVEL")]
	pub log_level: Option<String>,

	/// Emit logs as JSON lines
	#[arg(long)]
	pub json_logs: bool,

	/// Subcommand to execute
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Validate the configuration file
	#[command(about = "Validate the configuration and print a summary")]
	Validate {
		/// Also check that the RPC endpoint serves the configured chain
		#[arg(long)]
		check_endpoint: bool,
	},

	/// Build one unsigned transaction
	#[command(about = "Build an unsigned transaction from an intent and print it as JSON")]
	Build {
		/// JSON file holding the build intent, or `-` for stdin
		#[arg(help = "Intent file, `-` reads stdin")]
		intent: PathBuf,
	},
}

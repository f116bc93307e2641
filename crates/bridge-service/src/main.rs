use anyhow::{Context, Result};
use bridge_config::{BridgeConfig, ConfigLoader};
use bridge_service::cli::{Args, Command};
use bridge_service::service::{read_intent, BridgeService};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	let config = ConfigLoader::from_file(&args.config)
		.with_context(|| format!("Failed to load configuration from {:?}", args.config))?;

	let log_level = args
		.log_level
		.clone()
		.unwrap_or_else(|| config.logging.level.clone());
	setup_tracing(&log_level, args.json_logs || config.logging.json)?;

	match args.command {
		Command::Validate { check_endpoint } => validate(&config, check_endpoint).await,
		Command::Build { intent } => build(&config, &intent).await,
	}
}

async fn validate(config: &BridgeConfig, check_endpoint: bool) -> Result<()> {
	let service = BridgeService::from_config(config)?;

	info!("Configuration is valid");
	info!("Bridge name: {}", config.bridge.name);
	info!("Chain ID: {}", config.bridge.chain_id);
	info!("Role: {}", config.role()?);

	let mut pairs: Vec<&String> = config.pairs.keys().collect();
	pairs.sort();
	for pair in pairs {
		info!("  Pair: {}", pair);
	}

	if check_endpoint {
		service.check_endpoint().await?;
		info!("RPC endpoint serves chain {}", config.bridge.chain_id);
	}

	Ok(())
}

async fn build(config: &BridgeConfig, intent_path: &Path) -> Result<()> {
	let intent = read_intent(intent_path)?;
	let service = BridgeService::from_config(config)?;

	let built = service
		.build(&intent)
		.await
		.context("Failed to build transaction")?;

	println!("{}", serde_json::to_string_pretty(&built)?);
	Ok(())
}

fn setup_tracing(log_level: &str, json: bool) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	let registry = tracing_subscriber::registry().with(env_filter);

	// Logs go to stderr so stdout carries only the built transaction
	if json {
		registry
			.with(
				tracing_subscriber::fmt::layer()
					.json()
					.with_writer(std::io::stderr),
			)
			.try_init()?;
	} else {
		registry
			.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
			.try_init()?;
	}

	Ok(())
}

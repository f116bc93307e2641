//! Configuration for the bridge transaction builder.
//!
//! Configuration files are TOML, JSON or YAML, chosen by extension. String
//! values may reference environment variables as `${NAME}`, and a few
//! `BRIDGE_*` variables override file values after parsing.

pub mod loader;
pub mod types;

pub use loader::{load_config, ConfigLoader};
pub use types::*;

//! Configuration for the `txm` command-line tool
//!
//! Provides types and loading for `txm.toml`.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, merge_cli_overrides, CliOverrides, ConfigError};
pub use schema::*;

//! Configuration loading and discovery for `txm.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{OutputFormat, TxmConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "txm.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse txm.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output format
    pub format: Option<OutputFormat>,
    /// Override JSON pretty-printing
    pub pretty: Option<bool>,
    /// Enable strict parsing
    pub strict: Option<bool>,
}

/// Find txm.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for txm.toml
/// 2. Check XDG_CONFIG_HOME/transformatrix/txm.toml (or ~/.config/transformatrix/txm.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find txm.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("transformatrix").join(CONFIG_FILE_NAME);
    config_path.exists().then_some(config_path)
}

/// Find txm.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, discovery is used and a
/// missing file yields the default configuration.
pub fn load_config(path: Option<&Path>) -> Result<TxmConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(TxmConfig::default()),
    }
}

fn load_config_file(path: &Path) -> Result<TxmConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: TxmConfig = toml::from_str(&contents)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut TxmConfig, overrides: &CliOverrides) {
    if let Some(format) = overrides.format {
        config.output.format = format;
    }
    if let Some(pretty) = overrides.pretty {
        config.output.pretty = pretty;
    }
    if let Some(strict) = overrides.strict {
        config.parse.strict = strict;
    }
}

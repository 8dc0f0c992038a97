//! Configuration loading
//!
//! Reads `~/.config/tripseek/config.toml`. A missing default file yields the
//! built-in defaults; an explicitly requested file must exist.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, LookupConfig, TypeaheadConfig};

use crate::error::TripseekError;

const CONFIG_DIR: &str = "tripseek";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<Config, TripseekError> {
    match path {
        Some(path) => load_config_from_path(path),
        None => match config_path() {
            Some(path) if path.exists() => load_config_from_path(&path),
            _ => Ok(Config::default()),
        },
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, TripseekError> {
    let contents = fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<Config, TripseekError> {
    toml::from_str(content).map_err(|e| TripseekError::InvalidConfig(e.to_string()))
}

//! Configuration loading.
//!
//! A small optional `config.toml`: a missing file means defaults, a
//! malformed one is a real error with the offending path attached.

use std::io;
use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
pub struct LumenConfig {
    /// Path to a deck JSON file; the built-in deck is used when absent.
    pub deck: Option<PathBuf>,
    /// Override for the data directory.
    pub data_dir: Option<PathBuf>,
    /// Default display name for readings.
    pub name: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Location of the config file: `LUMEN_CONFIG` if set, otherwise
/// `config.toml` under the platform config directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    env::var_os("LUMEN_CONFIG")
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("lumen").join("config.toml")))
}

/// Load configuration from the default location; absent file or
/// unresolvable location both fall back to defaults.
pub fn load_config() -> Result<LumenConfig, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(LumenConfig::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<LumenConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

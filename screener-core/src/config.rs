//! Server configuration.
//!
//! Defaults come from [`crate::constants`]; an adjacent `screener.toml`
//! can override individual fields. There is no environment-variable
//! surface beyond the log filter.

use std::path::Path;

use serde::Deserialize;

use crate::constants;
use crate::errors::{ScreenerError, ScreenerResult};

/// Process-wide configuration, fixed after startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to bind on all interfaces.
    pub port: u16,
    /// Path to the serialized classifier artifact.
    pub model_path: String,
    /// Directory holding the pre-built front-end bundle.
    pub static_dir: String,
    /// Directory where session records are written.
    pub data_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: constants::DEFAULT_PORT,
            model_path: constants::DEFAULT_MODEL_PATH.to_string(),
            static_dir: constants::DEFAULT_STATIC_DIR.to_string(),
            data_dir: constants::DEFAULT_DATA_DIR.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing fields fall back to their defaults via `#[serde(default)]`.
    pub fn from_file(path: &Path) -> ScreenerResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ScreenerError::Config {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        toml::from_str(&raw).map_err(|e| ScreenerError::Config {
            reason: format!("cannot parse {}: {e}", path.display()),
        })
    }

    /// Load from `screener.toml` in the working directory if present,
    /// otherwise return defaults.
    pub fn load() -> ScreenerResult<Self> {
        let path = Path::new("screener.toml");
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

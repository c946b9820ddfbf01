//! Configuration loading.
//!
//! Settings come from three layers, lowest to highest precedence: built-in
//! defaults, an optional YAML file, and CLI flags (applied in `main`). The
//! file is looked up from `--config`, then the `TASKMIRROR_CONFIG`
//! environment variable, then `~/.taskmirror/config.yaml`; a missing file
//! just means defaults.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TASKMIRROR_CONFIG";

/// Default base URL of the remote task API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the remote task API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Path of the SQLite file holding the offline mirror.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Default output format for rendered lists ("text" or "json").
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            store_path: default_store_path(),
            format: default_format(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_store_path() -> PathBuf {
    user_dir().join("tasks.db")
}

fn default_format() -> String {
    "text".to_string()
}

/// User-level data directory (`~/.taskmirror`), falling back to the current
/// directory when no home directory is known.
fn user_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".taskmirror"))
        .unwrap_or_else(|| PathBuf::from(".taskmirror"))
}

impl Config {
    /// Load configuration from an explicit file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ClientError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_yaml::from_str(&raw)
            .map_err(|e| ClientError::config(format!("invalid {}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Load configuration from the usual locations.
    ///
    /// An explicit path (CLI flag) wins over `TASKMIRROR_CONFIG`, which wins
    /// over the user-level file. Only an explicit path makes a missing file
    /// an error.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load(Path::new(&env_path));
        }

        let user_path = user_dir().join("config.yaml");
        if user_path.exists() {
            return Self::load(&user_path);
        }

        Ok(Self::default())
    }
}

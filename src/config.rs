//! Configuration Management
//!
//! Optional persistent settings for the client, read from
//! `<config dir>/mollie/config.json` and overridden by environment variables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "MOLLIE_API_KEY";

/// Environment variable overriding the API endpoint
pub const API_ENDPOINT_VAR: &str = "MOLLIE_API_ENDPOINT";

/// Client configuration
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// `live_…` or `test_…` key; validated when the client is built
    #[serde(default)]
    pub api_key: Option<String>,
    /// Replacement for the default API host
    #[serde(default)]
    pub api_endpoint: Option<String>,
    /// Request timeout, none by default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

// Security: never print the key itself
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_endpoint", &self.api_endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mollie").join("config.json"))
    }

    /// Load configuration from disk, then apply environment overrides
    pub fn load() -> Self {
        let config = match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        };

        config.with_env_overrides()
    }

    /// Load configuration from a specific file
    /// Missing or unreadable files yield the default configuration
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Apply `MOLLIE_API_KEY` / `MOLLIE_API_ENDPOINT` (env > file)
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(key) = non_empty_var(API_KEY_VAR) {
            self.api_key = Some(key);
        }
        if let Some(endpoint) = non_empty_var(API_ENDPOINT_VAR) {
            self.api_endpoint = Some(endpoint);
        }
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//! Application configuration
//!
//! Read from `<config_dir>/bloom-pizza/config.toml`. Every key is optional and
//! a missing file simply means defaults.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:9009/api/order";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Page shown when the TUI starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartRoute {
    Home,
    Order,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Order-intake URL orders are posted to
    pub endpoint: String,
    /// Seconds to wait for the order service, 0 waits indefinitely
    pub request_timeout_secs: u64,
    /// Theme name, see `ThemeManager::available_themes`
    pub theme: String,
    pub start_route: StartRoute,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: "Gruvbox Dark".to_string(),
            start_route: StartRoute::Home,
        }
    }
}

impl AppConfig {
    /// Load from the default location
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load from a specific file, falling back to defaults if it does not exist.
    /// Not validated here; command-line overrides still apply on top.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The endpoint must be an absolute http(s) URL
    pub fn validate(&self) -> ConfigResult<()> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };

        let url = url::Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Path of the default configuration file
    pub fn config_file_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("bloom-pizza").join("config.toml"))
    }
}

//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/syncspace/config.toml` by default. Every section is optional.
//!
//! ```toml
//! [display]
//! base_url = "https://syncspace.example"
//! today_limit = 2
//!
//! [ticker]
//! interval_ms = 1000
//!
//! [source]
//! path = "/home/me/.local/share/syncspace/calls.json"
//! refresh_secs = 60
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use syncspace_dashboard::{DEFAULT_BASE_URL, DashboardConfig, TickerConfig};

use crate::error::{ClientError, ClientResult};

/// Configuration for the syncspace client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Display settings.
    pub display: DisplaySettings,

    /// Countdown ticker settings.
    pub ticker: TickerSettings,

    /// Call source settings.
    pub source: SourceSettings,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Public origin that meeting links point to.
    pub base_url: String,

    /// Maximum number of meetings listed for today.
    pub today_limit: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            today_limit: syncspace_core::TODAY_LIMIT,
        }
    }
}

/// Countdown ticker settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerSettings {
    /// Milliseconds between countdown updates (1..=1000).
    pub interval_ms: u64,
}

impl Default for TickerSettings {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

/// Call source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// JSON file holding the upcoming calls.
    pub path: Option<PathBuf>,

    /// Seconds between re-reads in watch mode. `0` disables reloading.
    pub refresh_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            path: None,
            refresh_secs: 60,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path, or defaults if absent.
    pub fn load() -> ClientResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| ClientError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("syncspace")
    }

    /// Returns the default calls file path.
    pub fn default_calls_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("syncspace")
            .join("calls.json")
    }

    /// The calls file: `override_path`, then `[source] path`, then the
    /// default data location.
    pub fn calls_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.source.path.clone())
            .unwrap_or_else(Self::default_calls_path)
    }

    /// Reload period for watch mode, `None` when disabled.
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.source.refresh_secs > 0).then(|| Duration::from_secs(self.source.refresh_secs))
    }

    /// Builds and validates the dashboard configuration.
    pub fn dashboard_config(&self) -> ClientResult<DashboardConfig> {
        let config = DashboardConfig::new(&self.display.base_url)?
            .with_today_limit(self.display.today_limit)
            .with_ticker(TickerConfig::new(Duration::from_millis(self.ticker.interval_ms)));
        config.validate()?;
        Ok(config)
    }
}

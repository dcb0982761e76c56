//! Dashboard configuration.

use std::time::Duration;

use syncspace_core::TODAY_LIMIT;
use url::Url;

use crate::error::{DashboardError, DashboardResult};

/// Default public origin used to build shareable meeting links.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Longest allowed tick period. The display must never be more than one
/// second stale.
pub const MAX_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Countdown ticker configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerConfig {
    /// Time between countdown recomputations.
    pub interval: Duration,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval: MAX_TICK_INTERVAL,
        }
    }
}

impl TickerConfig {
    /// Creates a ticker configuration with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Checks that the interval is positive and at most one second.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.interval.is_zero() {
            return Err(DashboardError::config("tick interval must be positive"));
        }
        if self.interval > MAX_TICK_INTERVAL {
            return Err(DashboardError::config(format!(
                "tick interval must be at most {}ms, got {}ms",
                MAX_TICK_INTERVAL.as_millis(),
                self.interval.as_millis()
            )));
        }
        Ok(())
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Public origin that meeting links are built on.
    pub base_url: Url,

    /// Maximum number of meeting cards listed for today.
    pub today_limit: usize,

    /// Countdown ticker settings.
    pub ticker: TickerConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            today_limit: TODAY_LIMIT,
            ticker: TickerConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Creates a configuration for the given public base URL.
    pub fn new(base_url: &str) -> DashboardResult<Self> {
        let base_url = Url::parse(base_url).map_err(|source| DashboardError::BaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            base_url,
            ..Default::default()
        })
    }

    /// Builder: set the number of cards listed for today.
    pub fn with_today_limit(mut self, limit: usize) -> Self {
        self.today_limit = limit;
        self
    }

    /// Builder: set the ticker configuration.
    pub fn with_ticker(mut self, ticker: TickerConfig) -> Self {
        self.ticker = ticker;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.base_url.cannot_be_a_base() {
            return Err(DashboardError::config(format!(
                "base URL {} cannot hold a meeting path",
                self.base_url
            )));
        }
        self.ticker.validate()
    }
}

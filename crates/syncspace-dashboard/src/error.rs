//! Dashboard error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Result type for call source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised while fetching calls from the upstream source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading the calls file failed.
    #[error("failed to read calls from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The calls payload was not a JSON array of records.
    #[error("failed to decode calls from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The source is not reachable.
    #[error("call source unavailable: {message}")]
    Unavailable { message: String },
}

impl SourceError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Errors that can occur in the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Fetching calls failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL {url:?}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl DashboardError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

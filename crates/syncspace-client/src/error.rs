//! Client error types.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dashboard error (source, config).
    #[error(transparent)]
    Dashboard(#[from] syncspace_dashboard::DashboardError),

    /// Output could not be encoded.
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),

    /// Tracing setup failed.
    #[error(transparent)]
    Tracing(#[from] syncspace_core::TracingError),
}

//! Data source error types

use thiserror::Error;

/// Failures while obtaining the customer collection
///
/// The portal shows every variant to the user as the same fixed
/// "unreachable" message; the detail is only logged.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure (connection refused, DNS, timeout)
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The payload is not a customer array
    #[error("Invalid customer payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading a local data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The background fetch task panicked or was cancelled
    #[error("Fetch worker failed: {0}")]
    Worker(String),
}

/// Result type for data source operations
pub type Result<T> = std::result::Result<T, SourceError>;

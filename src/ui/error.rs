//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error while driving the terminal
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An interactive prompt failed
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The user dismissed a prompt
    #[error("Input cancelled by user")]
    Cancelled,
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

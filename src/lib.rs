//! Custfind - a schema-driven customer lookup portal
//!
//! A search form and a results table, both declared by a [`schema::SearchSchema`],
//! over a customer collection fetched from a REST service (or a local JSON
//! file). Matching is exact on normalized first name, last name and date of
//! birth.
//!
//! # Example
//!
//! ```
//! use custfind::form::FormController;
//! use custfind::page::PageController;
//! use custfind::schema::{AccessorRegistry, SearchSchema};
//! use custfind::source::FileSource;
//! use custfind::ui::output::ToastQueue;
//! use std::sync::Arc;
//!
//! let toasts = ToastQueue::new();
//! let mut form = FormController::new(Arc::new(SearchSchema::default()), Arc::new(toasts.clone()));
//! let mut page = PageController::new(Arc::new(FileSource::new("customers.json")), Arc::new(toasts))?;
//!
//! form.set_field("firstName", "Jane");
//! form.set_field("lastName", "Doe");
//! form.set_field("dateOfBirth", "1990-05-01");
//! form.submit(&mut page);
//! page.wait();
//!
//! let view = page.view(form.schema(), &AccessorRegistry::default());
//! assert!(view.is_error()); // no such file here
//! # Ok::<(), custfind::CustfindError>(())
//! ```

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod form;
pub mod logging;
pub mod matching;
pub mod model;
pub mod output;
pub mod page;
pub mod results;
pub mod schema;
pub mod source;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CustfindError {
    /// Schema loading or validation error
    #[error("Schema error: {0}")]
    Schema(#[from] schema::SchemaError),
    /// Data source error
    #[error("Data source error: {0}")]
    Source(#[from] source::SourceError),
    /// Terminal or prompt error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for custfind operations
pub type Result<T> = std::result::Result<T, CustfindError>;

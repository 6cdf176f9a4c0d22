//! UI layer
//!
//! Two front ends render the same form and results: line prompts for the
//! CLI and a full-screen portal. Both drive the controllers in
//! [`crate::form`] and [`crate::page`] and receive notices through
//! [`output::Notifier`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   FormController  /  PageController     │
//! │  (values, validation, search state)     │
//! └────────────────┬────────────────────────┘
//!                  │ FieldView, ResultsView, Toast
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ CLI           │  │ TUI               │
//! │ - Dialoguer   │  │ - PortalApp       │
//! │   prompts     │  │   (ratatui)       │
//! │ - Stdout      │  │ - ToastQueue      │
//! │   notifier    │  │                   │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! # Notices
//!
//! ```
//! use custfind::ui::output::{Notifier, Toast, ToastQueue};
//! use std::time::Duration;
//!
//! let queue = ToastQueue::with_ttl(Duration::from_secs(5));
//! queue.notify(Toast::destructive("Search failed", "Service unreachable"));
//!
//! // The portal shows the newest unexpired notice
//! assert_eq!(queue.latest().map(|t| t.title), Some("Search failed".to_string()));
//! ```

mod error;

pub mod input;
pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use input::{DialoguerPrompter, FieldPrompter, fill_form};
pub use output::{Notifier, Severity, StdoutNotifier, Toast, ToastQueue};
pub use ratatui_adapter::PortalApp;

//! Ratatui widgets for the portal TUI
//!
//! Custom widgets for rendering the search form, results and notices.

mod form_panel;
mod help_bar;
mod help_overlay;
mod results_pane;
mod toast_bar;

pub use form_panel::FormPanel;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use results_pane::ResultsPane;
pub use toast_bar::ToastBar;

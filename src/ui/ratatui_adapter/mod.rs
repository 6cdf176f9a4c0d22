//! Ratatui-based portal
//!
//! Interactive front end over the form and page controllers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                PortalApp                    │
//! │      (terminal setup, draw/poll loop)       │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │ form/page  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! Searches run on the page's tokio runtime. While one is in flight the loop
//! lends the runtime a slice of each frame before reading input, and every
//! iteration polls the page for completions.

mod events;
mod state;
mod theme;
pub mod widgets;

pub use events::EventResult;
pub use state::{AppState, FieldSlot, Focus, Mode};
pub use theme::Theme;

use events::poll_and_handle;
use widgets::{FormPanel, HelpBar, HelpOverlay, ResultsPane, ToastBar};

use crate::ui::error::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout},
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Full-screen customer search portal
pub struct PortalApp {
    state: AppState,
    theme: Theme,
}

impl PortalApp {
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            theme: Theme::default(),
        }
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run until the user quits
    ///
    /// # Errors
    /// Returns `UiError` if the terminal cannot be driven
    pub fn run(mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        tracing::info!(source = %self.state.page.source_description(), "portal started");

        let result = self.run_loop(&mut terminal);

        // Cleanup always, even on error
        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!(error = %e, "terminal cleanup failed");
        }
        result
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.state.should_exit {
            self.state.tick();
            terminal.draw(|frame| render(frame, &self.state, &self.theme))?;
            let input_wait = if self.state.page.is_loading() {
                self.state.page.drive(POLL_INTERVAL);
                Duration::ZERO
            } else {
                POLL_INTERVAL
            };
            poll_and_handle(&mut self.state, input_wait)?;
        }
        Ok(())
    }
}

/// Draw the whole screen
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();
    let slots = state.field_slots();

    let [header_area, form_area, results_area, toast_area, help_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(FormPanel::height(slots.len())),
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let header = Paragraph::new(vec![
        Line::styled("Customer Search Portal", theme.title_style()),
        Line::styled(
            "Find and manage customer information efficiently",
            theme.dimmed_style(),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, header_area);

    let form = FormPanel::new(&slots, theme, state.page.is_loading())
        .buttons_focus(state.focus == Focus::Search, state.focus == Focus::Reset);
    frame.render_widget(form, form_area);

    let view = state.view();
    let details = state.details_line();
    let results = ResultsPane::new(&view, theme)
        .selection(state.results_cursor, state.focus == Focus::Results)
        .details(details.as_deref());
    frame.render_widget(results, results_area);

    let toast = state.toasts.latest();
    let source = state.page.source_description();
    frame.render_widget(ToastBar::new(toast.as_ref(), &source, theme), toast_area);

    let hints = HelpBar::hints_for(state.focus);
    frame.render_widget(HelpBar::new(&hints, theme), help_area);

    if state.mode == Mode::Help {
        frame.render_widget(HelpOverlay::new(theme), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormController;
    use crate::page::PageController;
    use crate::schema::{AccessorRegistry, SearchSchema};
    use crate::testing::{FailingSource, StaticSource, jane_doe};
    use crate::source::CustomerSource;
    use crate::ui::output::ToastQueue;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn make_state(source: impl CustomerSource + 'static) -> AppState {
        let toasts = ToastQueue::new();
        let form = FormController::new(Arc::new(SearchSchema::default()), Arc::new(toasts.clone()));
        let page = PageController::new(Arc::new(source), Arc::new(toasts.clone())).unwrap();
        AppState::new(form, page, AccessorRegistry::default(), toasts)
    }

    fn draw(state: &AppState) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|frame| render(frame, state, &theme)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn fill_jane(state: &mut AppState) {
        state.form.set_field("firstName", "Jane");
        state.form.set_field("lastName", "Doe");
        state.form.set_field("dateOfBirth", "1990-05-01");
    }

    #[test]
    fn test_initial_screen() {
        let state = make_state(StaticSource(vec![jane_doe()]));
        let text = draw(&state);
        assert!(text.contains("Customer Search Portal"));
        assert!(text.contains("Search Customers"));
        assert!(text.contains("Enter search criteria above to find customers"));
        assert!(text.contains("[ Search ]"));
    }

    #[test]
    fn test_results_screen() {
        let mut state = make_state(StaticSource(vec![jane_doe()]));
        fill_jane(&mut state);
        state.submit();
        state.page.wait();

        let text = draw(&state);
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Found 1 customer"));
    }

    #[test]
    fn test_failure_screen_shows_banner_and_toast() {
        let mut state = make_state(FailingSource);
        fill_jane(&mut state);
        state.submit();
        state.page.wait();

        let text = draw(&state);
        assert!(text.contains("Error"));
        assert!(text.contains("Search failed"));
    }

    #[test]
    fn test_help_overlay() {
        let mut state = make_state(StaticSource(Vec::new()));
        state.mode = Mode::Help;
        assert!(draw(&state).contains("Press any key to close"));
    }
}

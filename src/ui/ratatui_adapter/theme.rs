//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the portal.

use ratatui::style::{Color, Modifier, Style};

use crate::ui::output::Severity;

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted result row
    pub selection_bg: Color,
    /// Foreground color for the highlighted result row
    pub selection_fg: Color,
    /// Accent for focus and key hints
    pub accent: Color,
    /// Color for error messages and destructive toasts
    pub error: Color,
    /// Color for informational toasts
    pub info: Color,
    /// Color for the loading indicator
    pub busy: Color,
    /// Color for unfocused borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for the title banner
    pub title: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            accent: Color::Cyan,
            error: Color::Red,
            info: Color::Cyan,
            busy: Color::Yellow,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            title: Color::White,
        }
    }

    /// Style for the highlighted result row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for key names and the focused element
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Style for table headers
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    #[must_use]
    pub fn busy_style(&self) -> Style {
        Style::default().fg(self.busy).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border of the focused field or pane
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Placeholder text inside empty fields
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for a form button
    #[must_use]
    pub fn button_style(&self, focused: bool, enabled: bool) -> Style {
        match (enabled, focused) {
            (false, _) => self.dimmed_style().add_modifier(Modifier::CROSSED_OUT),
            (true, true) => self.selected_style(),
            (true, false) => self.accent_style(),
        }
    }

    /// Style for a toast of the given severity
    #[must_use]
    pub fn toast_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Normal => self.info_style(),
            Severity::Destructive => self.error_style().add_modifier(Modifier::BOLD),
        }
    }
}

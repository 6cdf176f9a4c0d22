//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::state::Focus;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key combination (e.g., "Tab", "Ctrl+R")
    pub key: String,
    /// Action description (e.g., "next", "reset")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the focused element
    #[must_use]
    pub fn hints_for(focus: Focus) -> Vec<KeyHint> {
        let mut hints = vec![KeyHint::new("Tab", "next")];
        match focus {
            Focus::Field(_) | Focus::Search => hints.push(KeyHint::new("Enter", "search")),
            Focus::Reset => hints.push(KeyHint::new("Enter", "reset")),
            Focus::Results => hints.push(KeyHint::new("↑/↓", "row")),
        }
        hints.extend([
            KeyHint::new("Ctrl+R", "reset"),
            KeyHint::new("F1", "help"),
            KeyHint::new("Esc", "quit"),
        ]);
        hints
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.accent_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

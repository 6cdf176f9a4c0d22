//! Help overlay widget for displaying the full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn section(&self, title: &'static str) -> Line<'static> {
        Line::styled(title, self.theme.accent_style().add_modifier(Modifier::UNDERLINED))
    }

    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), self.theme.accent_style()),
            Span::raw(desc),
        ])
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            self.section("  Form"),
            Line::default(),
            self.help_line("Tab/Shift+Tab", "Next / previous element"),
            self.help_line("↑/↓", "Move between fields"),
            self.help_line("Type", "Edit the focused field"),
            self.help_line("←/→ Space", "Change a selection"),
            self.help_line("Ctrl+U", "Clear field"),
            self.help_line("Ctrl+W", "Delete word"),
            Line::default(),
            self.section("  Actions"),
            Line::default(),
            self.help_line("Enter", "Search (or Reset when focused)"),
            self.help_line("Ctrl+R", "Reset form and results"),
            self.help_line("↑/↓", "Move through results"),
            self.help_line("Esc/Ctrl+C", "Quit"),
            Line::default(),
            self.section("  Dates"),
            Line::default(),
            Line::raw("  Type digits; dashes are inserted as yyyy-mm-dd."),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
        ]
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 70, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}

//! Toast bar widget for displaying the latest notice

use crate::ui::output::{Severity, Toast};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Toast bar widget: latest unexpired toast on the left, data source on the right
pub struct ToastBar<'a> {
    toast: Option<&'a Toast>,
    source: &'a str,
    theme: &'a Theme,
}

impl<'a> ToastBar<'a> {
    #[must_use]
    pub const fn new(toast: Option<&'a Toast>, source: &'a str, theme: &'a Theme) -> Self {
        Self {
            toast,
            source,
            theme,
        }
    }

    const fn prefix_for(severity: Severity) -> &'static str {
        match severity {
            Severity::Normal => "ℹ ",
            Severity::Destructive => "✗ ",
        }
    }
}

impl Widget for ToastBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Notices ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)]).areas(inner);

        if let Some(toast) = self.toast {
            let style = self.theme.toast_style(toast.severity);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for(toast.severity), style),
                Span::styled(toast.title.as_str(), style.add_modifier(Modifier::BOLD)),
                Span::styled(": ", style),
                Span::styled(toast.description.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        Paragraph::new(Line::styled(
            format!("[{}]", self.source),
            self.theme.dimmed_style(),
        ))
        .alignment(Alignment::Right)
        .render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(toast: Option<&Toast>) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 120, 3);
        let mut buf = Buffer::empty(area);
        ToastBar::new(toast, "http://localhost:3001/customers", &theme).render(area, &mut buf);
        buf.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_shows_latest_toast() {
        let toast = Toast::normal("No results found", "Try adjusting your search criteria");
        let text = render(Some(&toast));
        assert!(text.contains("No results found: Try adjusting"));
        assert!(text.contains("localhost:3001"));
    }

    #[test]
    fn test_empty_without_toast() {
        let text = render(None);
        assert!(!text.contains("ℹ"));
        assert!(text.contains("Notices"));
    }
}

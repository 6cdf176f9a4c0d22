//! Search form panel: one boxed input per field plus the action buttons

use crate::form::{self, FieldWidget};
use crate::ui::ratatui_adapter::state::FieldSlot;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Fields per row
pub const FIELDS_PER_ROW: usize = 3;
const FIELD_HEIGHT: u16 = 3;

/// Form panel widget
pub struct FormPanel<'a> {
    slots: &'a [FieldSlot<'a>],
    theme: &'a Theme,
    is_loading: bool,
    search_focused: bool,
    reset_focused: bool,
}

impl<'a> FormPanel<'a> {
    #[must_use]
    pub const fn new(slots: &'a [FieldSlot<'a>], theme: &'a Theme, is_loading: bool) -> Self {
        Self {
            slots,
            theme,
            is_loading,
            search_focused: false,
            reset_focused: false,
        }
    }

    /// Mark which button has focus
    #[must_use]
    pub const fn buttons_focus(mut self, search: bool, reset: bool) -> Self {
        self.search_focused = search;
        self.reset_focused = reset;
        self
    }

    /// Total height needed for `field_count` fields
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn height(field_count: usize) -> u16 {
        let rows = field_count.div_ceil(FIELDS_PER_ROW) as u16;
        // borders + description + fields + buttons
        2 + 1 + rows * FIELD_HEIGHT + 1
    }

    fn field_line(&self, slot: &FieldSlot<'_>) -> Line<'static> {
        let cursor_style = Style::default().add_modifier(Modifier::SLOW_BLINK);
        let placeholder = match slot.view.widget {
            FieldWidget::Text { placeholder }
            | FieldWidget::Date { placeholder }
            | FieldWidget::Select { placeholder, .. } => placeholder,
            FieldWidget::Hidden => None,
        };

        let mut spans = Vec::new();
        if let FieldWidget::Select { .. } = slot.view.widget {
            let arrow_style = if slot.focused {
                self.theme.accent_style()
            } else {
                self.theme.dimmed_style()
            };
            spans.push(Span::styled("◂ ", arrow_style));
            if slot.display.is_empty() {
                spans.push(Span::styled(
                    placeholder.unwrap_or_default().to_string(),
                    self.theme.placeholder_style(),
                ));
            } else {
                spans.push(Span::raw(slot.display.clone()));
            }
            spans.push(Span::styled(" ▸", arrow_style));
            return Line::from(spans);
        }

        if slot.display.is_empty() {
            if slot.focused {
                spans.push(Span::styled("│", cursor_style));
            }
            if let Some(placeholder) = placeholder {
                spans.push(Span::styled(placeholder.to_string(), self.theme.placeholder_style()));
            }
            return Line::from(spans);
        }

        match slot.cursor.filter(|_| slot.focused) {
            Some(cursor) => {
                let split = slot
                    .display
                    .char_indices()
                    .nth(cursor)
                    .map_or(slot.display.len(), |(i, _)| i);
                let (before, after) = slot.display.split_at(split);
                spans.push(Span::raw(before.to_string()));
                spans.push(Span::styled("│", cursor_style));
                spans.push(Span::raw(after.to_string()));
            }
            None => spans.push(Span::raw(slot.display.clone())),
        }
        Line::from(spans)
    }

    fn render_field(&self, slot: &FieldSlot<'_>, area: Rect, buf: &mut Buffer) {
        let border_style = if slot.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", slot.view.label_text()));

        Paragraph::new(self.field_line(slot))
            .block(block)
            .render(area, buf);
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer) {
        let enabled = form::actions_enabled(self.is_loading);
        let search_label = format!("[ {} ]", form::submit_label(self.is_loading));
        let line = Line::from(vec![
            Span::styled(search_label, self.theme.button_style(self.search_focused, enabled)),
            Span::raw("  "),
            Span::styled("[ Reset ]", self.theme.button_style(self.reset_focused, enabled)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

impl Widget for FormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(" Search Customers ", self.theme.title_style()));
        let inner = block.inner(area);
        block.render(area, buf);

        let row_count = self.slots.len().div_ceil(FIELDS_PER_ROW);
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(std::iter::repeat_n(Constraint::Length(FIELD_HEIGHT), row_count));
        constraints.push(Constraint::Length(1));
        let rows = Layout::vertical(constraints).split(inner);

        Paragraph::new(Line::styled(
            "Enter search criteria to find customers",
            self.theme.dimmed_style(),
        ))
        .render(rows[0], buf);

        for (row, chunk) in self.slots.chunks(FIELDS_PER_ROW).enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let columns = Layout::horizontal(
                (0..FIELDS_PER_ROW).map(|_| Constraint::Ratio(1, FIELDS_PER_ROW as u32)),
            )
            .split(rows[row + 1]);
            for (slot, cell) in chunk.iter().zip(columns.iter()) {
                self.render_field(slot, *cell, buf);
            }
        }

        self.render_buttons(rows[row_count + 1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::render_field;
    use crate::schema::SearchSchema;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn test_height() {
        assert_eq!(FormPanel::height(3), 7);
        assert_eq!(FormPanel::height(4), 10);
    }

    #[test]
    fn test_renders_labels_placeholders_and_buttons() {
        let schema = SearchSchema::default();
        let slots: Vec<_> = schema
            .sorted_fields()
            .into_iter()
            .enumerate()
            .map(|(i, config)| FieldSlot {
                view: render_field(config, ""),
                display: if i == 0 { "Jane".to_string() } else { String::new() },
                cursor: Some(if i == 0 { 4 } else { 0 }),
                focused: i == 0,
            })
            .collect();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 90, FormPanel::height(slots.len()));
        let mut buf = Buffer::empty(area);

        FormPanel::new(&slots, &theme, true).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("First Name *"));
        assert!(text.contains("Jane│"));
        assert!(text.contains("Enter last name"));
        assert!(text.contains("[ Searching... ]"));
        assert!(text.contains("[ Reset ]"));
    }
}

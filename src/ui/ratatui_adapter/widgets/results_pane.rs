//! Results pane: message states or the results table

use crate::results::{ResultTable, ResultsView};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget, Wrap},
};

/// Results pane widget
pub struct ResultsPane<'a> {
    view: &'a ResultsView,
    theme: &'a Theme,
    selected: usize,
    focused: bool,
    details: Option<&'a str>,
}

impl<'a> ResultsPane<'a> {
    #[must_use]
    pub const fn new(view: &'a ResultsView, theme: &'a Theme) -> Self {
        Self {
            view,
            theme,
            selected: 0,
            focused: false,
            details: None,
        }
    }

    /// Highlighted row and whether the table has focus
    #[must_use]
    pub const fn selection(mut self, selected: usize, focused: bool) -> Self {
        self.selected = selected;
        self.focused = focused;
        self
    }

    /// Extra line shown under the table
    #[must_use]
    pub const fn details(mut self, details: Option<&'a str>) -> Self {
        self.details = details;
        self
    }

    /// Column constraints from the width hints; unhinted columns share the rest
    #[must_use]
    pub fn column_widths(table: &ResultTable) -> Vec<Constraint> {
        table
            .columns
            .iter()
            .map(|c| c.width.map_or(Constraint::Fill(1), Constraint::Percentage))
            .collect()
    }

    fn render_message(&self, text: &str, style: Style, title: &str, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(title.to_string());
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);
        Paragraph::new(Line::styled(text.to_string(), style))
            .alignment(Alignment::Center)
            .render(middle, buf);
    }

    fn render_error(&self, message: &str, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.error_style())
            .title(Span::styled(" Error ", self.theme.error_style()));
        Paragraph::new(Line::styled(message.to_string(), self.theme.error_style()))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }

    fn render_table(&self, table: &ResultTable, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" Search Results ", self.theme.title_style()))
            .title_bottom(Line::styled(format!(" {} ", table.caption), self.theme.dimmed_style()));
        let inner = block.inner(area);
        block.render(area, buf);

        let [table_area, details_area] =
            Layout::vertical([Constraint::Min(2), Constraint::Length(1)]).areas(inner);

        let header = Row::new(table.columns.iter().map(|c| Cell::from(c.label.clone())))
            .style(self.theme.header_style());
        let rows = table
            .rows
            .iter()
            .map(|r| Row::new(r.cells.iter().map(|cell| Cell::from(cell.clone()))));
        let widget = Table::new(rows, Self::column_widths(table))
            .header(header)
            .row_highlight_style(self.theme.selected_style())
            .highlight_symbol("> ");

        let mut state = TableState::default().with_selected(Some(self.selected));
        StatefulWidget::render(widget, table_area, buf, &mut state);

        if let Some(details) = self.details {
            Paragraph::new(Line::styled(details.to_string(), self.theme.dimmed_style()))
                .render(details_area, buf);
        }
    }
}

impl Widget for ResultsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.view {
            ResultsView::Loading => {
                let text = self.view.message().unwrap_or_default();
                self.render_message(text, self.theme.busy_style(), " Results ", area, buf);
            }
            ResultsView::Error(message) => self.render_error(message, area, buf),
            ResultsView::NotSearched | ResultsView::Empty => {
                let text = self.view.message().unwrap_or_default();
                self.render_message(text, self.theme.dimmed_style(), " Results ", area, buf);
            }
            ResultsView::Table(table) => self.render_table(table, area, buf),
        }
    }
}

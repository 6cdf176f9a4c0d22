//! Output formatting for CLI display
//!
//! Renders a [`ResultsView`] for the terminal (aligned, colored table),
//! for scripts (JSON) or for spreadsheets (CSV).

use crate::config::OutputFormat;
use crate::results::{ResultTable, ResultsView};
use colored::Colorize;
use serde::Serialize;
use serde_json::{Map, Value};

type Result<T> = std::result::Result<T, crate::CustfindError>;

/// Column gap in table output
const GAP: &str = "  ";

/// Render `view` in `format`
///
/// # Errors
/// Returns `CustfindError` if JSON or CSV serialization fails
pub fn render(view: &ResultsView, format: OutputFormat, quiet: bool) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table(view, quiet)),
        OutputFormat::Json => json(view),
        OutputFormat::Csv => csv(view),
    }
}

/// Stable name of the view state, used in JSON output
#[must_use]
pub const fn state_name(view: &ResultsView) -> &'static str {
    match view {
        ResultsView::Loading => "loading",
        ResultsView::Error(_) => "error",
        ResultsView::NotSearched => "notSearched",
        ResultsView::Empty => "empty",
        ResultsView::Table(_) => "table",
    }
}

/// Column-aligned table; message states print their message
#[must_use]
pub fn table(view: &ResultsView, quiet: bool) -> String {
    let ResultsView::Table(table) = view else {
        let message = view.message().unwrap_or_default();
        return if view.is_error() {
            format!("{} {message}", "Error:".red().bold())
        } else {
            message.dimmed().to_string()
        };
    };

    let widths = column_widths(table);
    let mut lines = Vec::with_capacity(table.rows.len() + 2);

    if !quiet {
        let header = table
            .columns
            .iter()
            .zip(widths.iter().copied())
            .map(|(column, width)| format!("{:<width$}", column.label).bold().to_string())
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(header.trim_end().to_string());
    }

    for row in &table.rows {
        let line = row
            .cells
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }

    if !quiet {
        lines.push(table.caption.dimmed().to_string());
    }
    lines.join("\n")
}

/// Widest of header and cells, per column, in characters
fn column_widths(table: &ResultTable) -> Vec<usize> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(column.label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

#[derive(Serialize)]
struct ViewDocument<'a> {
    state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<&'a str>,
    customers: Vec<Map<String, Value>>,
}

/// One object per row keyed by column key, plus the customer id
fn row_objects(table: &ResultTable) -> Vec<Map<String, Value>> {
    table
        .rows
        .iter()
        .map(|row| {
            let mut object = Map::new();
            object.insert("id".to_string(), Value::String(row.id.clone()));
            for (column, cell) in table.columns.iter().zip(&row.cells) {
                object.insert(column.key.clone(), Value::String(cell.clone()));
            }
            object
        })
        .collect()
}

fn json(view: &ResultsView) -> Result<String> {
    let document = match view {
        ResultsView::Table(table) => ViewDocument {
            state: state_name(view),
            message: None,
            caption: Some(&table.caption),
            customers: row_objects(table),
        },
        _ => ViewDocument {
            state: state_name(view),
            message: view.message(),
            caption: None,
            customers: Vec::new(),
        },
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Header of `id` and column keys, one record per row; message states yield nothing
fn csv(view: &ResultsView) -> Result<String> {
    let ResultsView::Table(table) = view else {
        return Ok(String::new());
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(
        std::iter::once("id").chain(table.columns.iter().map(|c| c.key.as_str())),
    )?;
    for row in &table.rows {
        writer.write_record(
            std::iter::once(row.id.as_str()).chain(row.cells.iter().map(String::as_str)),
        )?;
    }

    let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

//! Results area
//!
//! [`select_view`] picks exactly one of five display states from the page
//! state. Only the table state projects customers; the other four carry a
//! fixed message (or the error text verbatim).

use crate::model::Customer;
use crate::schema::{AccessorRegistry, SearchSchema};

pub const LOADING_MESSAGE: &str = "Searching customers...";
pub const NOT_SEARCHED_MESSAGE: &str = "Enter search criteria above to find customers";
pub const EMPTY_MESSAGE: &str = "No customers found matching your criteria";

/// One header cell of the results table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    /// Share of the table width, in percent
    pub width: Option<u16>,
}

/// One body row; `cells` line up with the table columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<String>,
}

/// Populated results table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub caption: String,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl ResultTable {
    /// Project `customers` through the schema's columns
    ///
    /// Columns without a registered accessor yield empty cells.
    #[must_use]
    pub fn build(customers: &[Customer], schema: &SearchSchema, registry: &AccessorRegistry) -> Self {
        let sorted = schema.sorted_columns();
        let columns = sorted
            .iter()
            .map(|c| TableColumn {
                key: c.key.clone(),
                label: c.label.clone(),
                width: c.width,
            })
            .collect();
        let rows = customers
            .iter()
            .map(|customer| TableRow {
                id: customer.id.clone(),
                cells: sorted
                    .iter()
                    .map(|c| registry.project(&c.key, customer))
                    .collect(),
            })
            .collect();

        Self {
            caption: caption(customers.len()),
            columns,
            rows,
        }
    }

    /// Cell of `row` under column `key`
    #[must_use]
    pub fn cell(&self, row: usize, key: &str) -> Option<&str> {
        let index = self.columns.iter().position(|c| c.key == key)?;
        self.rows.get(row)?.cells.get(index).map(String::as_str)
    }
}

/// Count caption with singular/plural wording
#[must_use]
pub fn caption(count: usize) -> String {
    if count == 1 {
        "Found 1 customer".to_string()
    } else {
        format!("Found {count} customers")
    }
}

/// What the results area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Loading,
    /// Error banner, message shown verbatim
    Error(String),
    NotSearched,
    Empty,
    Table(ResultTable),
}

impl ResultsView {
    /// Text for the message states; `None` for the table
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Error(message) => Some(message),
            Self::NotSearched => Some(NOT_SEARCHED_MESSAGE),
            Self::Empty => Some(EMPTY_MESSAGE),
            Self::Table(_) => None,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Select the display state; the first matching condition wins
///
/// Priority: loading, error, not yet searched, empty, table.
#[must_use]
pub fn select_view(
    customers: &[Customer],
    is_loading: bool,
    error: Option<&str>,
    has_searched: bool,
    schema: &SearchSchema,
    registry: &AccessorRegistry,
) -> ResultsView {
    if is_loading {
        return ResultsView::Loading;
    }
    if let Some(message) = error {
        return ResultsView::Error(message.to_string());
    }
    if !has_searched {
        return ResultsView::NotSearched;
    }
    if customers.is_empty() {
        return ResultsView::Empty;
    }
    ResultsView::Table(ResultTable::build(customers, schema, registry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::NOT_AVAILABLE;
    use crate::testing::{customer, jane_doe};

    fn view(customers: &[Customer], loading: bool, error: Option<&str>, searched: bool) -> ResultsView {
        select_view(
            customers,
            loading,
            error,
            searched,
            &SearchSchema::default(),
            &AccessorRegistry::default(),
        )
    }

    #[test]
    fn test_priority_order() {
        let some = vec![jane_doe()];
        assert_eq!(view(&some, true, Some("boom"), false), ResultsView::Loading);
        assert_eq!(view(&some, false, Some("boom"), false), ResultsView::Error("boom".to_string()));
        assert_eq!(view(&some, false, None, false), ResultsView::NotSearched);
        assert_eq!(view(&[], false, None, true), ResultsView::Empty);
        assert!(matches!(view(&some, false, None, true), ResultsView::Table(_)));
    }

    #[test]
    fn test_scenario_table_projection() {
        let ResultsView::Table(table) = view(&[jane_doe()], false, None, true) else {
            panic!("expected table");
        };

        assert_eq!(table.caption, "Found 1 customer");
        let labels: Vec<_> = table.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Name", "Date of Birth", "Primary Phone", "Primary Email"]);
        assert_eq!(table.rows[0].cells, ["Jane Doe", "1990-05-01", "555-1111", "jane@x.com"]);
        assert_eq!(table.cell(0, "primaryEmail"), Some("jane@x.com"));
    }

    #[test]
    fn test_scenario_missing_contacts_render_not_available() {
        let ResultsView::Table(table) =
            view(&[customer("9", "No", "Phone", "")], false, None, true)
        else {
            panic!("expected table");
        };

        assert_eq!(table.cell(0, "primaryPhone"), Some(NOT_AVAILABLE));
        assert_eq!(table.cell(0, "primaryEmail"), Some(NOT_AVAILABLE));
        assert_eq!(table.cell(0, "dateOfBirth"), Some(""));
    }

    #[test]
    fn test_rows_keep_input_order_and_plural_caption() {
        let customers = vec![
            customer("b", "Bo", "Zed", "2000-01-01"),
            customer("a", "Al", "Ace", "2000-01-01"),
        ];
        let ResultsView::Table(table) = view(&customers, false, None, true) else {
            panic!("expected table");
        };

        assert_eq!(table.caption, "Found 2 customers");
        let ids: Vec<_> = table.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_unmapped_column_renders_empty() {
        let mut schema = SearchSchema::default();
        schema.results[0].key = "loyaltyTier".to_string();
        let table = ResultTable::build(&[jane_doe()], &schema, &AccessorRegistry::default());
        assert_eq!(table.cell(0, "loyaltyTier"), Some(""));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ResultsView::Loading.message(), Some(LOADING_MESSAGE));
        assert_eq!(ResultsView::Empty.message(), Some(EMPTY_MESSAGE));
        assert_eq!(ResultsView::Error("x".into()).message(), Some("x"));
        assert!(ResultsView::Error("x".into()).is_error());
        assert_eq!(caption(0), "Found 0 customers");
    }
}

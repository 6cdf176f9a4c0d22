//! Application state for the ratatui TUI
//!
//! Owns the form and page controllers plus everything that only exists on
//! screen: one editor per field, keyboard focus, the highlighted result row
//! and the toast buffer.

use std::sync::Arc;

use crate::form::{self, FieldEdit, FieldInput, FieldView, FormController, SubmitOutcome};
use crate::model::Customer;
use crate::page::PageController;
use crate::results::ResultsView;
use crate::schema::{AccessorRegistry, SearchSchema, UiType};
use crate::ui::output::ToastQueue;

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Editing and browsing
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Element receiving key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Index into the schema's sorted fields
    Field(usize),
    Search,
    Reset,
    Results,
}

/// A field as drawn: schema view plus the editor's own text
pub struct FieldSlot<'a> {
    pub view: FieldView<'a>,
    pub display: String,
    pub cursor: Option<usize>,
    pub focused: bool,
}

/// Application state for the portal
pub struct AppState {
    schema: Arc<SearchSchema>,
    pub form: FormController,
    pub page: PageController,
    pub registry: AccessorRegistry,
    /// One editor per sorted field
    pub inputs: Vec<FieldInput>,
    pub focus: Focus,
    /// Highlighted row of the results table
    pub results_cursor: usize,
    pub mode: Mode,
    pub toasts: ToastQueue,
    pub should_exit: bool,
}

impl AppState {
    /// Create state over an existing form and page
    #[must_use]
    pub fn new(
        form: FormController,
        page: PageController,
        registry: AccessorRegistry,
        toasts: ToastQueue,
    ) -> Self {
        let schema = form.shared_schema();
        let inputs = Self::fresh_inputs(&schema, &form);
        let mut state = Self {
            schema,
            form,
            page,
            registry,
            inputs,
            focus: Focus::Search,
            results_cursor: 0,
            mode: Mode::Normal,
            toasts,
            should_exit: false,
        };
        if let Some(first) = state.focus_order().first() {
            state.focus = *first;
        }
        state
    }

    fn fresh_inputs(schema: &SearchSchema, form: &FormController) -> Vec<FieldInput> {
        schema
            .sorted_fields()
            .into_iter()
            .map(|config| FieldInput::for_field(config, form.value(&config.key)))
            .collect()
    }

    #[must_use]
    pub fn schema(&self) -> &SearchSchema {
        &self.schema
    }

    /// Whether Search and Reset accept input
    #[must_use]
    pub const fn actions_enabled(&self) -> bool {
        form::actions_enabled(self.page.is_loading())
    }

    /// Current results area
    #[must_use]
    pub fn view(&self) -> ResultsView {
        self.page.view(&self.schema, &self.registry)
    }

    /// Whether the results area currently shows the table
    #[must_use]
    pub fn has_table(&self) -> bool {
        let page = self.page.state();
        !page.is_loading && page.error.is_none() && page.has_searched && !page.customers.is_empty()
    }

    /// Focus targets in traversal order
    ///
    /// Fields without a widget are skipped; the results table is only
    /// reachable when it has rows.
    #[must_use]
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = self
            .schema
            .sorted_fields()
            .iter()
            .enumerate()
            .filter(|(_, config)| config.ui_type != UiType::Unrecognized)
            .map(|(i, _)| Focus::Field(i))
            .collect();
        order.push(Focus::Search);
        order.push(Focus::Reset);
        if self.has_table() {
            order.push(Focus::Results);
        }
        order
    }

    fn step_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let len = order.len();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.focus = order[next];
    }

    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(false);
    }

    /// Widget type of the focused field
    #[must_use]
    pub fn focused_ui_type(&self) -> Option<UiType> {
        match self.focus {
            Focus::Field(index) => self.schema.sorted_fields().get(index).map(|f| f.ui_type),
            _ => None,
        }
    }

    /// Apply an edit to the focused field; returns whether its value changed
    pub fn edit_focused(&mut self, edit: FieldEdit) -> bool {
        let Focus::Field(index) = self.focus else {
            return false;
        };
        let fields = self.schema.sorted_fields();
        let (Some(config), Some(input)) = (fields.get(index), self.inputs.get_mut(index)) else {
            return false;
        };
        match input.apply(config, edit) {
            Some(value) => {
                self.form.set_field(&config.key, value);
                true
            }
            None => false,
        }
    }

    /// Submit the form unless a search is running
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        if !self.actions_enabled() {
            return None;
        }
        let outcome = self.form.submit(&mut self.page);
        if matches!(outcome, SubmitOutcome::Submitted(_)) {
            self.results_cursor = 0;
        }
        Some(outcome)
    }

    /// Clear the form and results unless a search is running
    pub fn reset(&mut self) -> bool {
        if !self.actions_enabled() {
            return false;
        }
        self.form.reset(&mut self.page);
        self.inputs = Self::fresh_inputs(&self.schema, &self.form);
        self.results_cursor = 0;
        self.toasts.clear();
        true
    }

    /// Apply finished searches and expire toasts; returns whether to redraw
    pub fn tick(&mut self) -> bool {
        self.toasts.prune();
        let changed = self.page.poll();
        if changed {
            let count = self.page.state().customers.len();
            self.results_cursor = self.results_cursor.min(count.saturating_sub(1));
            if self.focus == Focus::Results && count == 0 {
                self.focus = Focus::Search;
            }
        }
        changed
    }

    pub fn cursor_up(&mut self) {
        self.results_cursor = self.results_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let count = self.page.state().customers.len();
        if self.results_cursor + 1 < count {
            self.results_cursor += 1;
        }
    }

    /// Customer behind the highlighted row
    #[must_use]
    pub fn highlighted(&self) -> Option<&Customer> {
        if self.has_table() {
            self.page.state().customers.get(self.results_cursor)
        } else {
            None
        }
    }

    /// Status and address line for the highlighted row
    #[must_use]
    pub fn details_line(&self) -> Option<String> {
        let customer = self.highlighted()?;
        let address = self.registry.project("address", customer);
        Some(format!(
            "Marital status: {}  Address: {address}",
            customer.marital_status.as_str()
        ))
    }

    /// Fields with a widget, in display order
    #[must_use]
    pub fn field_slots(&self) -> Vec<FieldSlot<'_>> {
        self.schema
            .sorted_fields()
            .into_iter()
            .enumerate()
            .filter_map(|(index, config)| {
                let view = form::render_field(config, self.form.value(&config.key));
                if !view.has_widget() {
                    return None;
                }
                let input = self.inputs.get(index)?;
                Some(FieldSlot {
                    view,
                    display: input.display(config),
                    cursor: input.cursor(),
                    focused: self.focus == Focus::Field(index),
                })
            })
            .collect()
    }
}

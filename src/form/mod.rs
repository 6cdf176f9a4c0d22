//! Search form state
//!
//! [`FormController`] owns the current field values, validates the required
//! fields on submit and hands a [`SearchParams`] to its [`FormHandler`]. It
//! knows nothing about how fields are drawn: backends read [`FieldView`]s from
//! [`FormController::views`] and report edits through
//! [`FormController::set_field`].

pub mod field;
pub mod input;

pub use field::{FieldEdit, FieldInput, FieldView, FieldWidget, REQUIRED_MARKER, render_field};
pub use input::TextBuffer;

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::SearchParams;
use crate::schema::SearchSchema;
use crate::ui::output::{Notifier, Toast};

/// Toast title raised when required fields are blank
pub const MISSING_FIELDS_TITLE: &str = "Missing Required Fields";
/// Toast description raised when required fields are blank
pub const MISSING_FIELDS_DESCRIPTION: &str = "Please fill in all required fields before searching.";

/// Receiver of form submissions and resets
pub trait FormHandler {
    /// A valid search was submitted
    fn on_search(&mut self, params: SearchParams);

    /// The form was cleared
    fn on_reset(&mut self);
}

/// Result of [`FormController::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The handler received these criteria
    Submitted(SearchParams),
    /// Validation failed on these keys; the handler was not called
    MissingFields(Vec<String>),
}

/// Whether the Search and Reset actions accept input
#[must_use]
pub const fn actions_enabled(is_loading: bool) -> bool {
    !is_loading
}

/// Label of the submit action
#[must_use]
pub const fn submit_label(is_loading: bool) -> &'static str {
    if is_loading { "Searching..." } else { "Search" }
}

/// Field values of the search form
pub struct FormController {
    schema: Arc<SearchSchema>,
    values: HashMap<String, String>,
    notifier: Arc<dyn Notifier>,
}

impl FormController {
    /// Create an empty form over `schema`
    #[must_use]
    pub fn new(schema: Arc<SearchSchema>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            schema,
            values: HashMap::new(),
            notifier,
        }
    }

    #[must_use]
    pub fn schema(&self) -> &SearchSchema {
        &self.schema
    }

    /// Handle to the schema for collaborators that outlive a borrow
    #[must_use]
    pub fn shared_schema(&self) -> Arc<SearchSchema> {
        Arc::clone(&self.schema)
    }

    /// Replace one value, leaving the others untouched
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Current value of `key`; a missing key reads as empty
    #[must_use]
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    /// Renderer output for every field, in display order
    #[must_use]
    pub fn views(&self) -> Vec<FieldView<'_>> {
        self.schema
            .sorted_fields()
            .into_iter()
            .map(|config| render_field(config, self.value(&config.key)))
            .collect()
    }

    /// Required keys whose value is blank after trimming
    #[must_use]
    pub fn missing_required(&self) -> Vec<String> {
        self.schema
            .required_keys()
            .into_iter()
            .filter(|key| self.value(key).trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Criteria built from the current values
    #[must_use]
    pub fn params(&self) -> SearchParams {
        let [first, last, dob] = SearchParams::KEYS;
        SearchParams::new(self.value(first), self.value(last), self.value(dob))
    }

    /// Validate and forward the current criteria to `handler`
    ///
    /// Values are kept after a submission so the user can refine them.
    pub fn submit(&self, handler: &mut impl FormHandler) -> SubmitOutcome {
        let missing = self.missing_required();
        if !missing.is_empty() {
            tracing::info!(missing = ?missing, "search blocked by missing required fields");
            self.notifier.notify(Toast::destructive(
                MISSING_FIELDS_TITLE,
                MISSING_FIELDS_DESCRIPTION,
            ));
            return SubmitOutcome::MissingFields(missing);
        }

        let params = self.params();
        handler.on_search(params.clone());
        SubmitOutcome::Submitted(params)
    }

    /// Clear every value and notify `handler`
    pub fn reset(&mut self, handler: &mut impl FormHandler) {
        self.values.clear();
        handler.on_reset();
    }
}

//! Prompt-based field rendering
//!
//! The line-oriented counterpart of the TUI form: each [`FieldView`] becomes
//! one prompt. Text and date fields are read as text (dates must be
//! `yyyy-mm-dd`), select fields as a choice list.

use super::error::{Result, UiError};
use crate::form::{FieldView, FieldWidget, FormController, field::date_value};

/// Entry shown first in optional select prompts
pub const NO_SELECTION: &str = "(none)";

/// Backend that asks the user for one field value
pub trait FieldPrompter {
    /// Ask for `view`'s value; the current value is offered as default
    ///
    /// # Errors
    /// Returns `UiError` if the prompt cannot be shown or is cancelled
    fn prompt_field(&self, view: &FieldView<'_>) -> Result<String>;
}

/// Ask for the fields of `form` and store the answers
///
/// With `only_blank`, fields that already hold a value are skipped. Fields
/// without a widget are never prompted.
///
/// # Errors
/// Returns the first prompt failure
pub fn fill_form<P: FieldPrompter + ?Sized>(
    form: &mut FormController,
    prompter: &P,
    only_blank: bool,
) -> Result<()> {
    let answers = form
        .views()
        .iter()
        .filter(|view| view.has_widget())
        .filter(|view| !only_blank || view.value.trim().is_empty())
        .map(|view| -> Result<(String, String)> {
            Ok((view.key.to_string(), prompter.prompt_field(view)?))
        })
        .collect::<Result<Vec<_>>>()?;

    for (key, value) in answers {
        form.set_field(&key, value);
    }
    Ok(())
}

/// Check a typed date; blank passes only for optional fields
fn check_date(input: &str, required: bool) -> std::result::Result<(), String> {
    if input.trim().is_empty() && !required {
        return Ok(());
    }
    if date_value(input).is_empty() {
        Err("Enter a date as yyyy-mm-dd".to_string())
    } else {
        Ok(())
    }
}

/// CLI prompts using dialoguer
pub struct DialoguerPrompter {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    fn prompt_text(&self, view: &FieldView<'_>, date: bool) -> Result<String> {
        use dialoguer::Input;

        let required = view.required;
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(view.label_text())
            .allow_empty(!required);
        if !view.value.is_empty() {
            input = input.default(view.value.to_string());
        }
        if date {
            input = input.validate_with(move |text: &String| check_date(text, required));
        }

        let answer = input
            .interact_text()
            .map_err(|e| UiError::Prompt(e.to_string()))?;
        Ok(if date {
            date_value(&answer)
        } else {
            answer
        })
    }

    fn prompt_select(&self, view: &FieldView<'_>) -> Result<String> {
        use dialoguer::Select;

        let FieldWidget::Select {
            options, selected, ..
        } = view.widget
        else {
            return Ok(view.value.to_string());
        };

        // Optional selects get a leading "no selection" entry
        let offset = usize::from(!view.required);
        let mut items: Vec<&str> = Vec::with_capacity(options.len() + offset);
        if offset == 1 {
            items.push(NO_SELECTION);
        }
        items.extend(options.iter().map(|o| o.label.as_str()));
        if items.is_empty() {
            return Err(UiError::Prompt(format!("{} has no options", view.label)));
        }

        let chosen = Select::with_theme(&self.theme)
            .with_prompt(view.label_text())
            .items(&items)
            .default(selected.map_or(0, |i| i + offset))
            .interact_opt()
            .map_err(|e| UiError::Prompt(e.to_string()))?
            .ok_or(UiError::Cancelled)?;

        Ok(chosen
            .checked_sub(offset)
            .and_then(|i| options.get(i))
            .map(|o| o.value.clone())
            .unwrap_or_default())
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldPrompter for DialoguerPrompter {
    fn prompt_field(&self, view: &FieldView<'_>) -> Result<String> {
        match view.widget {
            FieldWidget::Text { .. } => self.prompt_text(view, false),
            FieldWidget::Date { .. } => self.prompt_text(view, true),
            FieldWidget::Select { .. } => self.prompt_select(view),
            FieldWidget::Hidden => Ok(view.value.to_string()),
        }
    }
}

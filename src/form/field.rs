//! Field rendering and editing
//!
//! [`render_field`] turns one schema entry and its current value into a
//! backend-neutral [`FieldView`]; the TUI and the interactive CLI prompts both
//! draw from it. [`FieldInput`] is the per-field editor state that turns key
//! presses into the value reported back to the form.

use chrono::NaiveDate;

use super::input::TextBuffer;
use crate::matching::DATE_FORMAT;
use crate::schema::{FieldConfig, SelectOption, UiType};

/// Marker appended to labels of required fields
pub const REQUIRED_MARKER: &str = "*";

/// Widget chosen for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldWidget<'a> {
    /// Single-line text box
    Text { placeholder: Option<&'a str> },
    /// Date box, value is `yyyy-mm-dd` or empty
    Date { placeholder: Option<&'a str> },
    /// Option picker; `selected` indexes `options`
    Select {
        options: &'a [SelectOption],
        selected: Option<usize>,
        placeholder: Option<&'a str>,
    },
    /// Unrecognized widget type: nothing is drawn
    Hidden,
}

/// Everything a backend needs to draw one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub required: bool,
    pub value: &'a str,
    pub widget: FieldWidget<'a>,
}

impl FieldView<'_> {
    /// Label with the required marker when applicable
    #[must_use]
    pub fn label_text(&self) -> String {
        if self.required {
            format!("{} {REQUIRED_MARKER}", self.label)
        } else {
            self.label.to_string()
        }
    }

    /// Whether the backend should draw an input at all
    #[must_use]
    pub const fn has_widget(&self) -> bool {
        !matches!(self.widget, FieldWidget::Hidden)
    }
}

/// Select the widget for `config` showing `value`
#[must_use]
pub fn render_field<'a>(config: &'a FieldConfig, value: &'a str) -> FieldView<'a> {
    let placeholder = config.placeholder.as_deref();
    let widget = match config.ui_type {
        UiType::Text => FieldWidget::Text { placeholder },
        UiType::Date => FieldWidget::Date { placeholder },
        UiType::Select => FieldWidget::Select {
            options: &config.options,
            selected: config.options.iter().position(|o| o.value == value),
            placeholder,
        },
        UiType::Unrecognized => FieldWidget::Hidden,
    };

    FieldView {
        key: &config.key,
        label: &config.label,
        required: config.required,
        value,
        widget,
    }
}

/// Value a date box reports for its current content
///
/// Only complete, valid dates are reported; anything else reports `""`.
#[must_use]
pub fn date_value(content: &str) -> String {
    NaiveDate::parse_from_str(content.trim(), DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// An editing gesture on the focused field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    Delete,
    DeleteWord,
    Clear,
    Left,
    Right,
    Home,
    End,
    NextOption,
    PrevOption,
}

/// Editor state of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(TextBuffer),
    Date(TextBuffer),
    Select(Option<usize>),
    Inert,
}

impl FieldInput {
    /// Editor for `config`, initialised from the form value
    #[must_use]
    pub fn for_field(config: &FieldConfig, value: &str) -> Self {
        match config.ui_type {
            UiType::Text => Self::Text(TextBuffer::with_content(value)),
            UiType::Date => Self::Date(TextBuffer::with_content(value)),
            UiType::Select => Self::Select(config.options.iter().position(|o| o.value == value)),
            UiType::Unrecognized => Self::Inert,
        }
    }

    /// Apply an edit, returning the value to report when the content changed
    pub fn apply(&mut self, config: &FieldConfig, edit: FieldEdit) -> Option<String> {
        match self {
            Self::Text(buf) => edit_buffer(buf, edit).then(|| buf.buffer.clone()),
            Self::Date(buf) => {
                let changed = match edit {
                    FieldEdit::Insert(c) => insert_date_char(buf, c),
                    other => edit_buffer(buf, other),
                };
                changed.then(|| date_value(&buf.buffer))
            }
            Self::Select(selected) => {
                let count = config.options.len();
                let next = match edit {
                    FieldEdit::NextOption | FieldEdit::Right if count > 0 => {
                        Some(selected.map_or(0, |i| (i + 1) % count))
                    }
                    FieldEdit::PrevOption | FieldEdit::Left if count > 0 => {
                        Some(selected.map_or(count - 1, |i| (i + count - 1) % count))
                    }
                    FieldEdit::Backspace | FieldEdit::Delete | FieldEdit::Clear => None,
                    _ => return None,
                };
                if next == *selected {
                    return None;
                }
                *selected = next;
                Some(
                    next.and_then(|i| config.options.get(i))
                        .map(|o| o.value.clone())
                        .unwrap_or_default(),
                )
            }
            Self::Inert => None,
        }
    }

    /// Text shown inside the widget
    #[must_use]
    pub fn display(&self, config: &FieldConfig) -> String {
        match self {
            Self::Text(buf) | Self::Date(buf) => buf.buffer.clone(),
            Self::Select(selected) => selected
                .and_then(|i| config.options.get(i))
                .map(|o| o.label.clone())
                .unwrap_or_default(),
            Self::Inert => String::new(),
        }
    }

    /// Character cursor for editable boxes
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        match self {
            Self::Text(buf) | Self::Date(buf) => Some(buf.cursor),
            Self::Select(_) | Self::Inert => None,
        }
    }
}

fn edit_buffer(buf: &mut TextBuffer, edit: FieldEdit) -> bool {
    match edit {
        FieldEdit::Insert(c) => {
            buf.insert_char(c);
            true
        }
        FieldEdit::Backspace => buf.backspace(),
        FieldEdit::Delete => buf.delete(),
        FieldEdit::DeleteWord => buf.delete_word_backwards(),
        FieldEdit::Clear => buf.clear(),
        FieldEdit::Left => {
            buf.cursor_left();
            false
        }
        FieldEdit::Right => {
            buf.cursor_right();
            false
        }
        FieldEdit::Home => {
            buf.cursor_home();
            false
        }
        FieldEdit::End => {
            buf.cursor_end();
            false
        }
        FieldEdit::NextOption | FieldEdit::PrevOption => false,
    }
}

/// Date boxes accept digits and dashes, inserting dashes after year and month
fn insert_date_char(buf: &mut TextBuffer, c: char) -> bool {
    if buf.len() >= 10 || !(c.is_ascii_digit() || c == '-') {
        return false;
    }
    let at_end = buf.cursor == buf.len();
    if c.is_ascii_digit() && at_end && matches!(buf.len(), 4 | 7) {
        buf.insert_char('-');
    }
    buf.insert_char(c);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SearchSchema;

    fn select_config() -> FieldConfig {
        FieldConfig {
            key: "maritalStatus".to_string(),
            ui_type: UiType::Select,
            label: "Status".to_string(),
            render_order: 4,
            placeholder: Some("Any status".to_string()),
            required: false,
            options: vec![
                SelectOption::new("Single", "Single"),
                SelectOption::new("Married", "Married"),
            ],
        }
    }

    #[test]
    fn test_render_text_field_with_required_marker() {
        let schema = SearchSchema::default();
        let config = schema.field("firstName").unwrap();
        let view = render_field(config, "Ja");

        assert_eq!(view.label_text(), "First Name *");
        assert_eq!(view.value, "Ja");
        assert_eq!(
            view.widget,
            FieldWidget::Text {
                placeholder: Some("Enter first name")
            }
        );
    }

    #[test]
    fn test_render_date_and_select() {
        let schema = SearchSchema::default();
        let view = render_field(schema.field("dateOfBirth").unwrap(), "");
        assert!(matches!(view.widget, FieldWidget::Date { .. }));

        let config = select_config();
        let view = render_field(&config, "Married");
        assert_eq!(view.label_text(), "Status");
        match view.widget {
            FieldWidget::Select {
                options,
                selected,
                placeholder,
            } => {
                assert_eq!(options.len(), 2);
                assert_eq!(selected, Some(1));
                assert_eq!(placeholder, Some("Any status"));
            }
            other => panic!("expected select, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_renders_no_widget() {
        let mut config = select_config();
        config.ui_type = UiType::Unrecognized;
        let view = render_field(&config, "x");
        assert!(!view.has_widget());
        assert_eq!(FieldInput::for_field(&config, "x"), FieldInput::Inert);
    }

    #[test]
    fn test_text_input_reports_every_keystroke() {
        let schema = SearchSchema::default();
        let config = schema.field("firstName").unwrap();
        let mut input = FieldInput::for_field(config, "");

        assert_eq!(input.apply(config, FieldEdit::Insert(' ')), Some(" ".to_string()));
        assert_eq!(input.apply(config, FieldEdit::Insert('J')), Some(" J".to_string()));
        assert_eq!(input.apply(config, FieldEdit::Left), None);
        assert_eq!(input.apply(config, FieldEdit::Backspace), Some("J".to_string()));
        assert_eq!(input.cursor(), Some(0));
    }

    #[test]
    fn test_date_input_reports_only_complete_dates() {
        let schema = SearchSchema::default();
        let config = schema.field("dateOfBirth").unwrap();
        let mut input = FieldInput::for_field(config, "");

        let mut reported = Vec::new();
        for c in "19900501".chars() {
            reported.push(input.apply(config, FieldEdit::Insert(c)).unwrap());
        }
        assert_eq!(input.display(config), "1990-05-01");
        assert_eq!(reported.last().unwrap(), "1990-05-01");
        assert!(reported[..7].iter().all(String::is_empty));

        assert_eq!(input.apply(config, FieldEdit::Insert('9')), None);
        assert_eq!(input.apply(config, FieldEdit::Insert('x')), None);
        assert_eq!(input.apply(config, FieldEdit::Backspace), Some(String::new()));
    }

    #[test]
    fn test_date_value() {
        assert_eq!(date_value("2001-02-03"), "2001-02-03");
        assert_eq!(date_value("2001-02-30"), "");
        assert_eq!(date_value("2001-02"), "");
    }

    #[test]
    fn test_select_cycles_and_clears() {
        let config = select_config();
        let mut input = FieldInput::for_field(&config, "");
        assert_eq!(input.display(&config), "");

        assert_eq!(input.apply(&config, FieldEdit::NextOption), Some("Single".to_string()));
        assert_eq!(input.apply(&config, FieldEdit::NextOption), Some("Married".to_string()));
        assert_eq!(input.apply(&config, FieldEdit::NextOption), Some("Single".to_string()));
        assert_eq!(input.apply(&config, FieldEdit::PrevOption), Some("Married".to_string()));
        assert_eq!(input.display(&config), "Married");

        assert_eq!(input.apply(&config, FieldEdit::Insert('a')), None);
        assert_eq!(input.apply(&config, FieldEdit::Clear), Some(String::new()));
        assert_eq!(input.apply(&config, FieldEdit::Clear), None);
    }
}

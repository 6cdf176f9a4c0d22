use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::error::{Result, SchemaError};
use crate::model::SearchParams;

/// Widget used to edit a search field
///
/// Unknown tags in a schema file deserialize to `Unrecognized` instead of
/// failing; such fields render nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiType {
    /// Single-line text box
    #[serde(alias = "input")]
    Text,
    /// Calendar date, edited and emitted as `yyyy-mm-dd`
    Date,
    /// Single choice among the field's options
    Select,
    /// Any tag this build does not know
    #[serde(other)]
    Unrecognized,
}

impl UiType {
    /// Tag as written in schema files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Select => "select",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// One choice of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Declarative description of one search form input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Form value key (e.g. `firstName`)
    pub key: String,
    pub ui_type: UiType,
    pub label: String,
    /// Lower numbers render first
    pub render_order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Only meaningful for `UiType::Select`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

/// Declarative description of one results table column
///
/// The value projection is not part of the column: it is looked up by `key`
/// in an [`super::AccessorRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFieldConfig {
    pub key: String,
    pub label: String,
    pub render_order: i32,
    /// Share of the table width, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
}

/// Form fields and result columns driving the portal
///
/// Entries keep their declaration order; consumers display them through
/// [`SearchSchema::sorted_fields`] and [`SearchSchema::sorted_columns`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSchema {
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
    #[serde(default)]
    pub results: Vec<ResultFieldConfig>,
}

impl Default for SearchSchema {
    fn default() -> Self {
        let field = |key: &str, ui_type, label: &str, order, placeholder: &str| FieldConfig {
            key: key.to_string(),
            ui_type,
            label: label.to_string(),
            render_order: order,
            placeholder: Some(placeholder.to_string()),
            required: true,
            options: Vec::new(),
        };
        let column = |key: &str, label: &str, order, width| ResultFieldConfig {
            key: key.to_string(),
            label: label.to_string(),
            render_order: order,
            width: Some(width),
        };

        Self {
            fields: vec![
                field("firstName", UiType::Text, "First Name", 1, "Enter first name"),
                field("lastName", UiType::Text, "Last Name", 2, "Enter last name"),
                field("dateOfBirth", UiType::Date, "Date of Birth", 3, "Select date"),
            ],
            results: vec![
                column("name", "Name", 1, 25),
                column("dateOfBirth", "Date of Birth", 2, 17),
                column("primaryPhone", "Primary Phone", 3, 20),
                column("primaryEmail", "Primary Email", 4, 33),
            ],
        }
    }
}

impl SearchSchema {
    /// Load a schema from a TOML file and validate it
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or fails validation
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let schema = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), fields = schema.fields.len(), "loaded search schema");
        Ok(schema)
    }

    /// Parse and validate a schema from TOML text
    ///
    /// # Errors
    /// Returns error if the text is not a valid schema
    pub fn from_toml(content: &str) -> Result<Self> {
        let schema: Self = toml::from_str(content)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Serialize to pretty TOML
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save the schema to `path`, creating parent directories
    ///
    /// # Errors
    /// Returns error if the file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Check structural invariants
    ///
    /// Keys must be unique per section and every key a search request is
    /// built from must be declared as a field. Fields with an unrecognized
    /// widget type are accepted but logged.
    ///
    /// # Errors
    /// Returns the first violated invariant
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.key.as_str()) {
                return Err(SchemaError::DuplicateKey {
                    section: "field",
                    key: field.key.clone(),
                });
            }
            if field.ui_type == UiType::Unrecognized {
                tracing::warn!(field = %field.key, "field has an unrecognized uiType and will not render");
            }
            if field.ui_type == UiType::Select && field.options.is_empty() {
                tracing::warn!(field = %field.key, "select field has no options");
            }
        }

        let mut seen = HashSet::new();
        for column in &self.results {
            if !seen.insert(column.key.as_str()) {
                return Err(SchemaError::DuplicateKey {
                    section: "result",
                    key: column.key.clone(),
                });
            }
        }

        for key in SearchParams::KEYS {
            if self.field(key).is_none() {
                return Err(SchemaError::MissingSearchField(key.to_string()));
            }
        }
        Ok(())
    }

    /// Look up a field by key
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Look up a result column by key
    #[must_use]
    pub fn column(&self, key: &str) -> Option<&ResultFieldConfig> {
        self.results.iter().find(|c| c.key == key)
    }

    /// Fields in display order (ties keep declaration order)
    #[must_use]
    pub fn sorted_fields(&self) -> Vec<&FieldConfig> {
        let mut fields: Vec<_> = self.fields.iter().collect();
        fields.sort_by_key(|f| f.render_order);
        fields
    }

    /// Result columns in display order (ties keep declaration order)
    #[must_use]
    pub fn sorted_columns(&self) -> Vec<&ResultFieldConfig> {
        let mut columns: Vec<_> = self.results.iter().collect();
        columns.sort_by_key(|c| c.render_order);
        columns
    }

    /// Keys of fields flagged `required`, in display order
    #[must_use]
    pub fn required_keys(&self) -> Vec<&str> {
        self.sorted_fields()
            .into_iter()
            .filter(|f| f.required)
            .map(|f| f.key.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_is_valid() {
        let schema = SearchSchema::default();
        schema.validate().unwrap();
        assert_eq!(
            schema.required_keys(),
            ["firstName", "lastName", "dateOfBirth"]
        );
    }

    #[test]
    fn test_sorted_fields_stable_on_ties() {
        let mut schema = SearchSchema::default();
        for field in &mut schema.fields {
            field.render_order = 5;
        }
        schema.fields[2].render_order = 0;

        let keys: Vec<_> = schema.sorted_fields().iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["dateOfBirth", "firstName", "lastName"]);
    }

    #[test]
    fn test_sorted_columns() {
        let mut schema = SearchSchema::default();
        schema.results.reverse();
        let keys: Vec<_> = schema.sorted_columns().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["name", "dateOfBirth", "primaryPhone", "primaryEmail"]);
    }

    #[test]
    fn test_toml_round_trip_keeps_declaration_order() {
        let schema = SearchSchema::default();
        let text = schema.to_toml().unwrap();
        assert!(text.contains("uiType = \"date\""));
        assert_eq!(SearchSchema::from_toml(&text).unwrap(), schema);
    }

    #[test]
    fn test_input_alias_and_unknown_ui_type() {
        let text = r#"
            [[fields]]
            key = "firstName"
            uiType = "input"
            label = "First"
            renderOrder = 1

            [[fields]]
            key = "lastName"
            uiType = "slider"
            label = "Last"
            renderOrder = 2

            [[fields]]
            key = "dateOfBirth"
            uiType = "date"
            label = "DOB"
            renderOrder = 3
        "#;
        let schema = SearchSchema::from_toml(text).unwrap();
        assert_eq!(schema.fields[0].ui_type, UiType::Text);
        assert_eq!(schema.fields[1].ui_type, UiType::Unrecognized);
        assert!(schema.required_keys().is_empty());
        assert!(schema.results.is_empty());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let mut schema = SearchSchema::default();
        schema.fields.push(schema.fields[0].clone());
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::DuplicateKey { section: "field", .. })
        ));
    }

    #[test]
    fn test_missing_search_field_rejected() {
        let mut schema = SearchSchema::default();
        schema.fields.retain(|f| f.key != "dateOfBirth");
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::MissingSearchField(key)) if key == "dateOfBirth"
        ));
    }

    #[test]
    fn test_select_options_parse_in_order() {
        let text = r#"
            [[fields]]
            key = "firstName"
            uiType = "text"
            label = "First"
            renderOrder = 1
            [[fields]]
            key = "lastName"
            uiType = "text"
            label = "Last"
            renderOrder = 2
            [[fields]]
            key = "dateOfBirth"
            uiType = "date"
            label = "DOB"
            renderOrder = 3
            [[fields]]
            key = "maritalStatus"
            uiType = "select"
            label = "Status"
            renderOrder = 4
            placeholder = "Any"
            options = [
                { label = "Single", value = "Single" },
                { label = "Married", value = "Married" },
            ]
        "#;
        let schema = SearchSchema::from_toml(text).unwrap();
        let status = schema.field("maritalStatus").unwrap();
        assert_eq!(status.options[1], SelectOption::new("Married", "Married"));
        assert_eq!(status.placeholder.as_deref(), Some("Any"));
    }
}

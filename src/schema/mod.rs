//! Search schema: form fields and result columns
//!
//! This module provides the `SearchSchema` type which declares:
//! - **Fields**: the search form inputs (widget type, label, order, required flag)
//! - **Results**: the table columns (label, order, width hint)
//!
//! The schema is pure data and round-trips through TOML. Column values are
//! computed by the projections in [`AccessorRegistry`], looked up by column key.
//!
//! # Examples
//!
//! ```
//! use custfind::schema::{AccessorRegistry, SearchSchema};
//!
//! let schema = SearchSchema::default();
//! let registry = AccessorRegistry::default();
//!
//! let labels: Vec<_> = schema.sorted_columns().iter().map(|c| c.label.as_str()).collect();
//! assert_eq!(labels, ["Name", "Date of Birth", "Primary Phone", "Primary Email"]);
//! assert!(registry.unmapped_columns(&schema).is_empty());
//! ```

pub mod accessors;
pub mod error;
pub mod types;

pub use accessors::{Accessor, AccessorRegistry, NOT_AVAILABLE};
pub use error::{Result, SchemaError};
pub use types::{FieldConfig, ResultFieldConfig, SearchSchema, SelectOption, UiType};

use std::path::Path;

/// Load the schema at `path`, or the built-in default when no path is given
///
/// Columns without a registered projection are logged; they render empty.
///
/// # Errors
/// Returns error if the file cannot be read, parsed or validated
pub fn load_or_default(path: Option<&Path>, registry: &AccessorRegistry) -> Result<SearchSchema> {
    let schema = match path {
        Some(path) => SearchSchema::load(path)?,
        None => SearchSchema::default(),
    };

    for key in registry.unmapped_columns(&schema) {
        tracing::warn!(column = key, "result column has no accessor and will render empty");
    }
    Ok(schema)
}

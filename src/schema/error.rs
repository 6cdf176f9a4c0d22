use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// I/O error when reading/writing schema file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// The same key is declared twice in one section
    #[error("Duplicate {section} key '{key}'")]
    DuplicateKey { section: &'static str, key: String },

    /// A field the search request depends on is not declared
    #[error("Search field '{0}' is not declared in the schema")]
    MissingSearchField(String),

    /// Field key not present in the schema
    #[error("Field '{0}' not found in schema")]
    UnknownField(String),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

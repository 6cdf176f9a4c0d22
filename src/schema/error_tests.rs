//! Unit tests for schema error types

#[cfg(test)]
mod tests {
    use crate::schema::error::SchemaError;
    use std::error::Error;

    #[test]
    fn test_duplicate_key_display() {
        let error = SchemaError::DuplicateKey {
            section: "field",
            key: "firstName".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate field key 'firstName'");
    }

    #[test]
    fn test_missing_search_field_display() {
        let error = SchemaError::MissingSearchField("dateOfBirth".to_string());
        assert_eq!(
            error.to_string(),
            "Search field 'dateOfBirth' is not declared in the schema"
        );
    }

    #[test]
    fn test_toml_error_from() {
        let toml_error = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let error: SchemaError = toml_error.into();

        assert!(error.to_string().starts_with("TOML error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_io_error_source() {
        let error = SchemaError::Io(std::io::Error::other("disk gone"));
        assert!(error.source().is_some());
        assert!(format!("{error:?}").contains("Io"));
    }

    #[test]
    fn test_unknown_field_source_none() {
        let error = SchemaError::UnknownField("nickname".to_string());
        assert!(error.source().is_none());
    }
}

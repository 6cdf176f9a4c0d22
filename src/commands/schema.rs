//! Schema command - inspect or export the active search schema

use crate::{
    CustfindError,
    cli::SchemaCommands,
    schema::{AccessorRegistry, SearchSchema},
};
use colored::Colorize;
use std::fmt::Write as _;

type Result<T> = std::result::Result<T, CustfindError>;

/// Fields and columns in display order, one per line
#[must_use]
pub fn describe(schema: &SearchSchema, registry: &AccessorRegistry, quiet: bool) -> String {
    let mut out = String::new();

    if !quiet {
        let _ = writeln!(out, "{}", "Fields".bold());
    }
    for field in schema.sorted_fields() {
        let required = if field.required { " *" } else { "" };
        let _ = writeln!(
            out,
            "  {:<16} {:<8} {}{}",
            field.key,
            field.ui_type.as_str(),
            field.label,
            required.red()
        );
    }

    if !quiet {
        let _ = writeln!(out, "{}", "Columns".bold());
    }
    for column in schema.sorted_columns() {
        let width = column
            .width
            .map_or_else(|| "auto".to_string(), |w| format!("{w}%"));
        let mapped = if registry.get(&column.key).is_some() {
            String::new()
        } else {
            format!(" {}", "(no accessor)".yellow())
        };
        let _ = writeln!(out, "  {:<16} {:<6} {}{mapped}", column.key, width, column.label);
    }
    out
}

/// Execute the schema command
///
/// # Errors
/// Returns an error if serialization fails or the export target exists
/// without `--force`
pub fn execute(schema: &SearchSchema, command: &SchemaCommands, quiet: bool) -> Result<()> {
    match command {
        SchemaCommands::Show => {
            print!("{}", schema.to_toml()?);
        }
        SchemaCommands::List => {
            print!("{}", describe(schema, &AccessorRegistry::default(), quiet));
        }
        SchemaCommands::Export { output, force } => {
            if output.exists() && !force {
                return Err(CustfindError::InvalidInput(format!(
                    "{} already exists. Use --force to overwrite",
                    output.display()
                )));
            }
            schema.save(output)?;
            if !quiet {
                println!("Schema written to {}", output.display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ResultFieldConfig;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_describe_lists_in_order() {
        let text = describe(&SearchSchema::default(), &AccessorRegistry::default(), true);
        let first = text.find("firstName").unwrap();
        let dob = text.find("dateOfBirth").unwrap();
        assert!(first < dob);
        assert!(text.contains("primaryEmail"));
        assert!(text.contains("33%"));
        assert!(!text.contains("no accessor"));
    }

    #[test]
    fn test_describe_flags_unmapped_columns() {
        let mut schema = SearchSchema::default();
        schema.results.push(ResultFieldConfig {
            key: "loyaltyTier".to_string(),
            label: "Tier".to_string(),
            render_order: 9,
            width: None,
        });
        let text = describe(&schema, &AccessorRegistry::default(), true);
        assert!(text.contains("loyaltyTier"));
        assert!(text.contains("no accessor"));
        assert!(text.contains("auto"));
    }

    #[test]
    fn test_export_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("schema.toml");
        let schema = SearchSchema::default();

        let export = |force| SchemaCommands::Export {
            output: output.clone(),
            force,
        };
        execute(&schema, &export(false), true).unwrap();
        assert!(matches!(
            execute(&schema, &export(false), true),
            Err(CustfindError::InvalidInput(_))
        ));
        execute(&schema, &export(true), true).unwrap();

        assert_eq!(SearchSchema::load(&output).unwrap(), schema);
    }

    #[test]
    fn test_export_into_new_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output: PathBuf = temp_dir.path().join("a").join("schema.toml");
        execute(
            &SearchSchema::default(),
            &SchemaCommands::Export {
                output: output.clone(),
                force: false,
            },
            true,
        )
        .unwrap();
        assert!(output.exists());
    }
}

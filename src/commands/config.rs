//! Config command - show, read and change configuration values

use crate::{
    CustfindError,
    cli::{ConfigCommands, split_setting},
    config::{CustfindConfig, KEYS},
};
use std::path::Path;

type Result<T> = std::result::Result<T, CustfindError>;

fn unknown_key(key: &str) -> CustfindError {
    CustfindError::InvalidInput(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}

/// Execute the config command against the file at `path`
///
/// `config` is the effective configuration; `set` writes it back with the
/// change applied.
///
/// # Errors
/// Returns an error for unknown keys, invalid values or if saving fails
pub fn execute_at(
    mut config: CustfindConfig,
    command: &ConfigCommands,
    path: &Path,
    quiet: bool,
) -> Result<String> {
    match command {
        ConfigCommands::Show => Ok(config.to_toml()?),
        ConfigCommands::Get { key } => {
            if !KEYS.contains(&key.as_str()) {
                return Err(unknown_key(key));
            }
            Ok(config.get(key)?)
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = split_setting(setting).ok_or_else(|| {
                CustfindError::InvalidInput(
                    "Invalid format. Use: custfind config set key=value".into(),
                )
            })?;
            if !KEYS.contains(&key) {
                return Err(unknown_key(key));
            }
            config.set(key, value)?;
            config.save_to(path)?;
            Ok(if quiet {
                String::new()
            } else {
                format!("Set {key} = {}", config.get(key)?)
            })
        }
    }
}

/// Execute the config command against the user's config file
///
/// # Errors
/// Returns an error for unknown keys, invalid values or if saving fails
pub fn execute(config: CustfindConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    let path = CustfindConfig::config_path()?;
    let text = execute_at(config, command, &path, quiet)?;
    if !text.is_empty() {
        println!("{}", text.trim_end());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let command = ConfigCommands::Set {
            setting: "output_format=csv".to_string(),
        };

        let message = execute_at(CustfindConfig::default(), &command, &path, false).unwrap();

        assert_eq!(message, "Set output_format = csv");
        let loaded = CustfindConfig::load_from(&path).unwrap();
        assert_eq!(loaded.output_format, OutputFormat::Csv);
    }

    #[test]
    fn test_get_and_show() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let get = ConfigCommands::Get {
            key: "toast_ttl_secs".to_string(),
        };
        assert_eq!(execute_at(CustfindConfig::default(), &get, &path, false).unwrap(), "5");

        let shown = execute_at(CustfindConfig::default(), &ConfigCommands::Show, &path, false).unwrap();
        assert!(shown.contains("base_url = \"http://localhost:3001\""));
        assert!(!path.exists());
    }

    #[test]
    fn test_rejects_unknown_and_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let unknown = ConfigCommands::Set {
            setting: "theme=dark".to_string(),
        };
        let err = execute_at(CustfindConfig::default(), &unknown, &path, false).unwrap_err();
        assert!(err.to_string().contains("Available keys: base_url"));

        let malformed = ConfigCommands::Set {
            setting: "quiet".to_string(),
        };
        assert!(execute_at(CustfindConfig::default(), &malformed, &path, false).is_err());

        let bad_value = ConfigCommands::Set {
            setting: "quiet=sometimes".to_string(),
        };
        assert!(matches!(
            execute_at(CustfindConfig::default(), &bad_value, &path, false),
            Err(CustfindError::Config(_))
        ));
        assert!(!path.exists());
    }
}

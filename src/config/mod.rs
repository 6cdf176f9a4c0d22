//! Configuration module for custfind
//!
//! Manages where customers are fetched from, which schema is active and how
//! the CLI prints results. Configuration is stored in the user's config
//! directory and can be overridden with `CUSTFIND_*` environment variables.

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::source::DEFAULT_BASE_URL;

/// Keys accepted by `config get` / `config set`
pub const KEYS: [&str; 5] = [
    "base_url",
    "schema_path",
    "toast_ttl_secs",
    "quiet",
    "output_format",
];

/// How the CLI prints a result view
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, column-aligned table
    #[default]
    Table,
    /// JSON document of the view
    Json,
    /// CSV with a header row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ConfigError::Message(format!(
                "Unknown output format '{other}' (expected table, json or csv)"
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

const fn default_toast_ttl() -> u64 {
    5
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CustfindConfig {
    /// Root URL of the customer service; customers live at `<base_url>/customers`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Schema file replacing the built-in search schema
    #[serde(default)]
    pub schema_path: Option<PathBuf>,

    /// Seconds a toast stays visible in the portal
    #[serde(default = "default_toast_ttl")]
    pub toast_ttl_secs: u64,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default format for `search` output
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for CustfindConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            schema_path: None,
            toast_ttl_secs: default_toast_ttl(),
            quiet: false,
            output_format: OutputFormat::default(),
        }
    }
}

impl CustfindConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("custfind").join("config.toml"))
    }

    /// Load configuration from the user's config file and environment
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, overlaid with `CUSTFIND_*` variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed, or an
    /// environment override has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("CUSTFIND").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), base_url = %config.base_url, "configuration loaded");
        Ok(config)
    }

    /// Save configuration to the user's config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Read one key as text; unset optional keys read as an empty string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "base_url" => Ok(self.base_url.clone()),
            "schema_path" => Ok(self
                .schema_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "toast_ttl_secs" => Ok(self.toast_ttl_secs.to_string()),
            "quiet" => Ok(self.quiet.to_string()),
            "output_format" => Ok(self.output_format.to_string()),
            other => Err(ConfigError::NotFound(other.to_string())),
        }
    }

    /// Set one key from text
    ///
    /// An empty `schema_path` clears the override.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or values of the wrong type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "base_url" => {
                if value.is_empty() {
                    return Err(ConfigError::Message("base_url cannot be empty".to_string()));
                }
                self.base_url = value.trim_end_matches('/').to_string();
            }
            "schema_path" => {
                self.schema_path = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "toast_ttl_secs" => {
                self.toast_ttl_secs = value.parse().map_err(|_| {
                    ConfigError::Message(format!("toast_ttl_secs must be a whole number, got '{value}'"))
                })?;
            }
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!("quiet must be true or false, got '{value}'"))
                })?;
            }
            "output_format" => self.output_format = value.parse()?,
            other => return Err(ConfigError::NotFound(other.to_string())),
        }
        Ok(())
    }
}

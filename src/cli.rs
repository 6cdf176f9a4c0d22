//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for custfind using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive search portal (default)
//! - **search**: One-shot search printing a table, JSON or CSV
//! - **schema**: Inspect or export the active search schema
//! - **config**: Show, read or change configuration values
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use custfind::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["custfind", "search", "-f", "Jane", "-l", "Doe", "-d", "1990-05-01"]);
//! assert!(matches!(cli.get_command(), Commands::Search { .. }));
//! ```

use crate::config::{KEYS, OutputFormat};
use clap::builder::PossibleValuesParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Where customers come from and which schema drives the form
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// Read customers from a JSON file instead of the customer service
    #[arg(long = "data", value_name = "FILE", global = true, conflicts_with = "base_url")]
    pub data: Option<PathBuf>,

    /// Customer service root URL (overrides config)
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Search schema file (overrides config)
    #[arg(long = "schema", value_name = "FILE", global = true)]
    pub schema: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(name = "custfind")]
#[command(about = "Look up customers by name and date of birth", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Append logs to this file (the portal logs nowhere else)
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive search portal (default)
    #[command(visible_alias = "b")]
    Browse,

    /// Search once and print the results
    #[command(visible_alias = "s")]
    Search {
        /// First name (case-insensitive exact match)
        #[arg(short = 'f', long = "first-name", value_name = "NAME")]
        first_name: Option<String>,

        /// Last name (case-insensitive exact match)
        #[arg(short = 'l', long = "last-name", value_name = "NAME")]
        last_name: Option<String>,

        /// Date of birth as yyyy-mm-dd
        #[arg(short = 'd', long = "dob", visible_alias = "date-of-birth", value_name = "DATE")]
        date_of_birth: Option<String>,

        /// Extra form field as KEY=VALUE (for custom schema fields)
        #[arg(short = 'F', long = "field", value_name = "KEY=VALUE", num_args = 1)]
        fields: Vec<String>,

        /// Output format (overrides config)
        #[arg(short = 'o', long = "format", value_enum)]
        format: Option<OutputFormat>,

        /// Prompt for fields not given on the command line
        #[arg(short = 'i', long = "interactive")]
        interactive: bool,
    },

    /// Inspect the active search schema
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Schema subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SchemaCommands {
    /// Print the active schema as TOML
    Show,

    /// List form fields and result columns in display order
    #[command(visible_alias = "ls")]
    List,

    /// Write the active schema to a file as a starting point for edits
    Export {
        /// Destination file
        #[arg(value_name = "FILE")]
        output: PathBuf,

        /// Replace an existing file
        #[arg(long = "force")]
        force: bool,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., base_url=http://localhost:3001)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., output_format)
        #[arg(value_name = "KEY", value_parser = PossibleValuesParser::new(KEYS))]
        key: String,
    },
}

/// Split a `KEY=VALUE` argument
///
/// Only the first `=` separates, so values may contain `=`.
#[must_use]
pub fn split_setting(setting: &str) -> Option<(&str, &str)> {
    let (key, value) = setting.split_once('=')?;
    let key = key.trim();
    (!key.is_empty()).then_some((key, value.trim()))
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_browse() {
        let cli = Cli::parse_from(["custfind"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.get_command(), Commands::Browse);
    }

    #[test]
    fn test_browse_alias() {
        let cli = Cli::parse_from(["custfind", "b"]);
        assert_eq!(cli.command, Some(Commands::Browse));
    }

    #[test]
    fn test_parse_search_flags() {
        let cli = Cli::parse_from([
            "custfind", "search", "-f", "Jane", "-l", "Doe", "--dob", "1990-05-01", "-o", "json",
        ]);
        let Some(Commands::Search {
            first_name,
            last_name,
            date_of_birth,
            format,
            interactive,
            fields,
        }) = cli.command
        else {
            panic!("Expected Search command");
        };
        assert_eq!(first_name.as_deref(), Some("Jane"));
        assert_eq!(last_name.as_deref(), Some("Doe"));
        assert_eq!(date_of_birth.as_deref(), Some("1990-05-01"));
        assert_eq!(format, Some(OutputFormat::Json));
        assert!(!interactive);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_parse_search_custom_fields() {
        let cli = Cli::parse_from([
            "custfind", "s", "-F", "maritalStatus=married", "-F", "city=Oslo",
        ]);
        let Some(Commands::Search { fields, .. }) = cli.command else {
            panic!("Expected Search command");
        };
        assert_eq!(fields, ["maritalStatus=married", "city=Oslo"]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "custfind", "search", "--data", "customers.json", "-vv", "-q",
        ]);
        assert_eq!(cli.source.data, Some(PathBuf::from("customers.json")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_data_conflicts_with_base_url() {
        let result = Cli::try_parse_from([
            "custfind", "--data", "c.json", "--base-url", "http://x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::parse_from(["custfind", "config", "set", "quiet=true"]);
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::Set {
                    setting: "quiet=true".to_string()
                }
            })
        );
    }

    #[test]
    fn test_config_get_checks_key() {
        assert!(Cli::try_parse_from(["custfind", "config", "get", "base_url"]).is_ok());
        assert!(Cli::try_parse_from(["custfind", "config", "get", "colour"]).is_err());
    }

    #[test]
    fn test_parse_schema_export() {
        let cli = Cli::parse_from(["custfind", "schema", "export", "out.toml", "--force"]);
        assert_eq!(
            cli.command,
            Some(Commands::Schema {
                command: SchemaCommands::Export {
                    output: PathBuf::from("out.toml"),
                    force: true
                }
            })
        );
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::parse_from(["custfind", "completions", "bash"]);
        assert_eq!(cli.command, Some(Commands::Completions { shell: Shell::Bash }));
    }

    #[test]
    fn test_split_setting() {
        assert_eq!(split_setting("quiet=true"), Some(("quiet", "true")));
        assert_eq!(
            split_setting("base_url=http://h/?a=b"),
            Some(("base_url", "http://h/?a=b"))
        );
        assert_eq!(split_setting("schema_path="), Some(("schema_path", "")));
        assert_eq!(split_setting("quiet"), None);
        assert_eq!(split_setting("=true"), None);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

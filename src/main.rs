//! Custfind CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Open the interactive portal (default command)
//! custfind
//! custfind browse --base-url http://localhost:3001
//!
//! # Search once and print a table, JSON or CSV
//! custfind search -f Jane -l Doe -d 1990-05-01
//! custfind search -f Jane -l Doe -d 1990-05-01 -o json
//! custfind search --interactive
//!
//! # Work offline against a JSON file
//! custfind --data customers.json search -f Jane -l Doe -d 1990-05-01
//!
//! # Inspect and customise the search schema
//! custfind schema list
//! custfind schema export my-schema.toml
//! custfind config set schema_path=my-schema.toml
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/custfind/config.toml` on Linux) and can be overridden with
//! `CUSTFIND_*` environment variables.

use clap::CommandFactory;
use colored::Colorize;
use custfind::{
    CustfindError,
    cli::{Cli, Commands},
    commands::{self, Context, search::SearchArgs},
    completions, config, logging,
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, CustfindError>;

fn run(cli: Cli) -> Result<ExitCode> {
    let command = cli.get_command();
    let tui = command == Commands::Browse;
    logging::init_logging(cli.verbose, cli.log_file.as_deref(), tui)?;

    let config = config::CustfindConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    match command {
        Commands::Browse => {
            let ctx = Context::new(config, &cli.source, quiet)?;
            commands::browse(&ctx)?;
        }
        Commands::Search {
            first_name,
            last_name,
            date_of_birth,
            fields,
            format,
            interactive,
        } => {
            let ctx = Context::new(config, &cli.source, quiet)?;
            let args = SearchArgs {
                first_name,
                last_name,
                date_of_birth,
                fields,
                format,
                interactive,
            };
            return Ok(commands::search(&ctx, &args)?.exit_code());
        }
        Commands::Schema { command } => {
            let schema = Context::load_schema(&config, &cli.source)?;
            commands::schema(&schema, &command, quiet)?;
        }
        Commands::Config { command } => {
            commands::config(config, &command, quiet)?;
        }
        Commands::Completions { shell } => {
            completions::generate_static(shell, &mut Cli::command(), &mut std::io::stdout());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

//! Tracing subscriber setup
//!
//! The CLI logs to stderr. The portal owns the terminal, so it only logs
//! when a log file is given.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a `-v` count; other crates stay at `warn`
#[must_use]
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return "warn".to_string(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,custfind={level}")
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this twice keeps the
/// first subscriber.
///
/// # Errors
///
/// Returns an error if `log_file` cannot be opened for appending.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>, tui: bool) -> io::Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    if file_layer.is_none() && tui {
        return Ok(());
    }

    let stderr_layer = file_layer
        .is_none()
        .then(|| fmt::layer().with_target(false).with_writer(io::stderr));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // Already initialised (tests, repeated calls) is fine
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();
    Ok(())
}

//! Logging setup for the CLI

use tracing_subscriber::EnvFilter;

use crate::cli::error::CliError;

/// Log level for a `-v` count
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// verbosity flag. Logs go to stderr so stdout stays free for artifacts.
pub fn init_logging(verbosity: u8) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .compact()
        .try_init()
        .map_err(|e| CliError::LoggingError(e.to_string()))
}

//! CLI error types

use thiserror::Error;

use crate::config::ConfigError;
use crate::convert::ConvertError;

/// Errors reported by the command-line interface
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read stdin: {0}")]
    StdinReadError(String),

    #[error("Conversion failed: {0}")]
    ConversionError(#[from] ConvertError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Failed to initialize logging: {0}")]
    LoggingError(String),
}

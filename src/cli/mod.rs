//! CLI module for the xsd-template binary

#[cfg(feature = "cli")]
pub mod args;
#[cfg(feature = "cli")]
pub mod commands;
#[cfg(feature = "cli")]
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
#[cfg(feature = "cli")]
pub mod output;

#[cfg(feature = "cli")]
pub use args::{Cli, OutputFormat};
#[cfg(feature = "cli")]
pub use error::CliError;

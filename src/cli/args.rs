//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Summary output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Compact,
    Pretty,
}

/// Generate a Mustache template and a Workato field schema from an XSD file
#[derive(Debug, Parser)]
#[command(name = "xsd-template", version, about)]
pub struct Cli {
    /// Path to the XSD file, or `-` to read from stdin
    #[arg(short, long)]
    pub input: String,

    /// Directory for the generated files (defaults to the input's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print both artifacts to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Summary style
    #[arg(long, value_enum, default_value_t = OutputFormat::Compact)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

//! Generate command implementation

use std::io::Read;
use std::path::Path;

use crate::cli::args::{Cli, OutputFormat};
use crate::cli::error::CliError;
use crate::cli::output::{format_compact_output, format_pretty_output};
use crate::config::{GeneratorConfig, GeneratorConfigBuilder};
use crate::convert::{Artifacts, Converter, OutputPaths};

/// Outcome of a generate run
#[derive(Debug)]
pub struct GenerateOutcome {
    pub artifacts: Artifacts,
    /// Written files, `None` when the artifacts go to stdout
    pub paths: Option<OutputPaths>,
}

fn read_stdin() -> Result<String, CliError> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| CliError::StdinReadError(e.to_string()))?;
    Ok(content)
}

/// Resolve the generator configuration: config file first, then flags
pub fn resolve_config(cli: &Cli) -> Result<GeneratorConfig, CliError> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    let mut builder = GeneratorConfigBuilder::from_config(config);
    if let Some(dir) = &cli.output_dir {
        builder = builder.output_dir(dir.clone());
    }
    Ok(builder.build())
}

/// Convert the input and write the artifacts unless `--stdout` was given
pub fn run_generate(cli: &Cli) -> Result<GenerateOutcome, CliError> {
    let from_stdin = cli.input == "-";
    if from_stdin && !cli.stdout {
        return Err(CliError::InvalidArgument(
            "Reading from stdin requires --stdout".to_string(),
        ));
    }
    if cli.stdout && cli.output_dir.is_some() {
        return Err(CliError::InvalidArgument(
            "--output-dir cannot be combined with --stdout".to_string(),
        ));
    }

    let converter = Converter::new(resolve_config(cli)?);
    let input = Path::new(&cli.input);

    if from_stdin {
        let artifacts = converter.convert_str(&read_stdin()?)?;
        Ok(GenerateOutcome {
            artifacts,
            paths: None,
        })
    } else if cli.stdout {
        let artifacts = converter.convert_path(input)?;
        Ok(GenerateOutcome {
            artifacts,
            paths: None,
        })
    } else {
        let output = converter.convert_file(input)?;
        Ok(GenerateOutcome {
            artifacts: output.artifacts,
            paths: Some(output.paths),
        })
    }
}

/// Handle the generate command
pub fn handle_generate(cli: &Cli) -> Result<(), CliError> {
    let outcome = run_generate(cli)?;

    let summary = match cli.format {
        OutputFormat::Compact => format_compact_output(&outcome.artifacts, outcome.paths.as_ref()),
        OutputFormat::Pretty => format_pretty_output(&outcome.artifacts, outcome.paths.as_ref()),
    };

    if outcome.paths.is_some() {
        print!("{}", summary);
    } else {
        // Artifacts own stdout; the summary goes to stderr.
        print!("{}", outcome.artifacts.template);
        println!("{}", outcome.artifacts.field_schema);
        eprint!("{}", summary);
    }
    Ok(())
}

//! xsd-template binary

use clap::Parser;

use xsd_template_sdk::cli::Cli;
use xsd_template_sdk::cli::commands::generate::handle_generate;
use xsd_template_sdk::cli::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    handle_generate(&cli)?;
    Ok(())
}

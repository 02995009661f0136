//! Folio - portfolio configuration and credential verification toolkit.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use folio::cli::{self, Cli};
use folio::config::PortfolioConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    folio::logger::set_verbose(cli.verbose);

    let config = PortfolioConfig::discover(&cli.config)?;
    cli::run(&cli, &config)
}

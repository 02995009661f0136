//! Command-line interface module.

mod args;
mod credentials;
mod output;
mod portfolio;
mod verify;

pub use args::{
    Cli, Commands, CredentialsArgs, OutputArgs, ResolveArgs, SourceArgs, TitleArgs,
};

use anyhow::Result;

use crate::config::PortfolioConfig;

/// Execute the parsed command against the effective configuration.
pub fn run(cli: &Cli, config: &PortfolioConfig) -> Result<()> {
    let registry = config.registry()?;

    match &cli.command {
        Commands::Resolve { args } => verify::run_resolve(args, &registry),
        Commands::Detect { partners, url } => {
            verify::run_detect(partners, url.as_deref(), &registry)
        }
        Commands::Providers { output } => verify::run_providers(output, &registry),
        Commands::Config { output } => portfolio::run_config(config, output),
        Commands::Title { args } => portfolio::run_title(config, args),
        Commands::Credentials { args } => credentials::run_credentials(args, config, &registry),
        Commands::Stats { source } => credentials::run_stats(source, config, &registry),
    }
}

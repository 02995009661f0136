//! Command-line interface definitions.

use crate::config::DEFAULT_CONFIG_NAME;
use crate::config::title::{SEO_TITLE_MAX_LEN, TitleFormat};
use crate::credential::{Category, CredentialKind};
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Portfolio configuration and credential verification toolkit
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve the verification URL for a verify code
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Detect the verification provider from partner names
    #[command(visible_alias = "d")]
    Detect {
        /// Partner names; the first one is matched against known vendors
        #[arg(value_name = "PARTNER")]
        partners: Vec<String>,

        /// Verification URL matched against provider base URLs first
        #[arg(short, long, value_hint = clap::ValueHint::Url)]
        url: Option<String>,
    },

    /// List verification providers (builtin plus [verification])
    #[command(visible_alias = "p")]
    Providers {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the effective configuration (defaults merged with folio.toml)
    #[command(visible_alias = "c")]
    Config {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the page title
    #[command(visible_alias = "t")]
    Title {
        #[command(flatten)]
        args: TitleArgs,
    },

    /// Load, enrich, and filter a credential data file
    #[command(visible_alias = "cr")]
    Credentials {
        #[command(flatten)]
        args: CredentialsArgs,
    },

    /// Summary counts for a credential data file
    #[command(visible_alias = "s")]
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Verify code issued by the provider
    pub code: String,

    /// Provider id (default: [verification].default)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Custom URL template containing {verifyCode}; bypasses providers
    #[arg(short = 'u', long = "url", value_hint = clap::ValueHint::Url)]
    pub custom_url: Option<String>,

    /// Resolve as a professional-certificate specialization
    #[arg(short, long)]
    pub specialization: bool,
}

/// Title command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct TitleArgs {
    /// Print title suggestions instead of the SEO title
    #[arg(short, long, conflicts_with = "format")]
    pub suggestions: bool,

    /// Print a professional title in the given format
    #[arg(short, long, value_enum)]
    pub format: Option<TitleFormat>,

    /// Maximum SEO title length in characters
    #[arg(short, long, default_value_t = SEO_TITLE_MAX_LEN)]
    pub max_len: usize,
}

/// Which credential data file to read.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Data file (default: [education] data source for the kind)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Record shape of the data file
    #[arg(short, long, value_enum, default_value = "certification")]
    pub kind: CredentialKind,

    /// Reference date for recency, YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub now: Option<String>,
}

/// Credentials command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CredentialsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Case-insensitive search on name, partners (and skills for specializations)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only records in this category
    #[arg(long, value_enum)]
    pub category: Option<Category>,

    /// Only records completed within the last year
    #[arg(short, long)]
    pub recent: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// JSON output options.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

//! `credentials` and `stats` commands.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::args::{CredentialsArgs, OutputArgs, SourceArgs};
use crate::cli::output::write_json;
use crate::config::PortfolioConfig;
use crate::credential::{
    CredentialKind, EnrichedCredential, by_category, enrich_all, load_credentials, recent, search,
    stats,
};
use crate::utils::date::{DateTimeUtc, now_millis};
use crate::utils::plural_count;
use crate::verify::ProviderRegistry;
use crate::{debug, log};

pub fn run_credentials(
    args: &CredentialsArgs,
    config: &PortfolioConfig,
    registry: &ProviderRegistry,
) -> Result<()> {
    let items = load_enriched(&args.source, config, registry)?;
    let selected = select(&items, args);

    debug!("credential"; "{} of {} selected", selected.len(), items.len());
    write_json(&selected, &args.output)
}

pub fn run_stats(
    source: &SourceArgs,
    config: &PortfolioConfig,
    registry: &ProviderRegistry,
) -> Result<()> {
    let items = load_enriched(source, config, registry)?;
    let summary = stats(&items);

    log!(
        "credential";
        "{}, {} recent",
        plural_count(summary.total, source.kind.noun()),
        summary.recent
    );
    write_json(&summary, &OutputArgs::default())
}

fn load_enriched(
    source: &SourceArgs,
    config: &PortfolioConfig,
    registry: &ProviderRegistry,
) -> Result<Vec<EnrichedCredential>> {
    let path = data_path(source, config);
    let now = reference_time(source.now.as_deref())?;
    let records = load_credentials(&path, source.kind)?;
    Ok(enrich_all(records, registry, now))
}

/// Explicit file, else the `[education]` data source for the kind.
fn data_path(source: &SourceArgs, config: &PortfolioConfig) -> PathBuf {
    match (&source.file, source.kind) {
        (Some(file), _) => file.clone(),
        (None, CredentialKind::Certification) => config.certifications_path(),
        (None, CredentialKind::Specialization) => config.specializations_path(),
    }
}

fn reference_time(now: Option<&str>) -> Result<i64> {
    match now {
        Some(date) => DateTimeUtc::parse(date)
            .map(DateTimeUtc::to_unix_millis)
            .with_context(|| format!("invalid date `{date}`, expected YYYY-MM-DD")),
        None => Ok(now_millis()),
    }
}

/// Apply query, category, and recency filters in that order.
fn select<'a>(items: &'a [EnrichedCredential], args: &CredentialsArgs) -> Vec<&'a EnrichedCredential> {
    let mut selected = match &args.query {
        Some(query) => search(items, query),
        None => items.iter().collect(),
    };
    if let Some(category) = args.category {
        selected = by_category(selected, category);
    }
    if args.recent {
        selected = recent(selected);
    }
    selected
}

//! `resolve`, `detect` and `providers` commands.

use anyhow::Result;
use serde::Serialize;

use crate::cli::args::{OutputArgs, ResolveArgs};
use crate::cli::output::write_json;
use crate::debug;
use crate::utils::plural_count;
use crate::verify::{ProviderRegistry, VerificationProvider};

pub fn run_resolve(args: &ResolveArgs, registry: &ProviderRegistry) -> Result<()> {
    println!("{}", resolve(args, registry));
    Ok(())
}

fn resolve(args: &ResolveArgs, registry: &ProviderRegistry) -> String {
    let provider = args.provider.as_deref();
    let custom_url = args.custom_url.as_deref();

    if args.specialization {
        registry.resolve_specialization_verification_url(&args.code, provider, custom_url)
    } else {
        registry.resolve_verification_url(&args.code, provider, custom_url)
    }
}

pub fn run_detect(partners: &[String], url: Option<&str>, registry: &ProviderRegistry) -> Result<()> {
    let id = registry.detect_provider(partners, url);
    debug!("verify"; "detected `{}` from {}", id, plural_count(partners.len(), "partner name"));
    println!("{id}");
    Ok(())
}

#[derive(Serialize)]
struct ProviderListing<'a> {
    default: &'a str,
    providers: Vec<&'a VerificationProvider>,
}

pub fn run_providers(output: &OutputArgs, registry: &ProviderRegistry) -> Result<()> {
    debug!("verify"; "{}", plural_count(registry.len(), "provider"));
    write_json(&listing(registry), output)
}

fn listing(registry: &ProviderRegistry) -> ProviderListing<'_> {
    ProviderListing {
        default: registry.default_id(),
        providers: registry.iter().collect(),
    }
}

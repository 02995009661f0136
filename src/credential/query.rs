//! Search, filtering, and summary statistics over enriched credentials.

use super::enrich::{Category, EnrichedCredential};
use super::record::CredentialKind;
use serde::Serialize;
use std::collections::BTreeSet;

/// Case-insensitive match on name or partner name.
///
/// Specializations also match on their estimated skills.
pub fn search<'a>(items: &'a [EnrichedCredential], query: &str) -> Vec<&'a EnrichedCredential> {
    let query = query.to_lowercase();
    items.iter().filter(|item| matches_query(item, &query)).collect()
}

fn matches_query(item: &EnrichedCredential, lower_query: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(lower_query);

    contains(&item.record.name)
        || item.record.partners.iter().any(|p| contains(&p.name))
        || (item.record.kind == CredentialKind::Specialization
            && item.skills_estimated.iter().any(|skill| contains(skill)))
}

/// Accepts a dataset or the output of another filter.
pub fn by_category<'a>(
    items: impl IntoIterator<Item = &'a EnrichedCredential>,
    category: Category,
) -> Vec<&'a EnrichedCredential> {
    items
        .into_iter()
        .filter(|item| item.category == category)
        .collect()
}

pub fn recent<'a>(
    items: impl IntoIterator<Item = &'a EnrichedCredential>,
) -> Vec<&'a EnrichedCredential> {
    items.into_iter().filter(|item| item.is_recent).collect()
}

/// Summary counts for a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CredentialStats {
    pub total: usize,
    pub recent: usize,
    /// Distinct categories.
    pub categories: usize,
    /// Distinct partner names.
    pub providers: usize,
}

pub fn stats(items: &[EnrichedCredential]) -> CredentialStats {
    let categories: BTreeSet<Category> = items.iter().map(|item| item.category).collect();
    let partners: BTreeSet<&str> = items
        .iter()
        .flat_map(|item| item.record.partners.iter().map(|p| p.name.as_str()))
        .collect();

    CredentialStats {
        total: items.len(),
        recent: items.iter().filter(|item| item.is_recent).count(),
        categories: categories.len(),
        providers: partners.len(),
    }
}

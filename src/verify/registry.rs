//! Ordered provider registry.
//!
//! The registry is built once at startup and only read afterwards. Entry
//! order matters: URL-based detection returns the first entry whose base
//! URL matches, so earlier entries win on overlapping base URLs.

use super::provider::{VerificationProvider, placeholder_count};
use crate::config::VerificationConfig;
use thiserror::Error;

/// Default provider id for records without an explicit provider.
pub const DEFAULT_PROVIDER: &str = "coursera";

/// Entry used for Coursera professional certificates.
pub const SPECIALIZATION_PROVIDER: &str = "coursera-specialization";

/// Registry construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("provider id must not be empty")]
    EmptyId,

    #[error("duplicate provider id `{0}`")]
    DuplicateId(String),

    #[error("provider `{id}` url_pattern must contain exactly one {{verifyCode}} placeholder (found {found})")]
    Placeholder { id: String, found: usize },

    #[error("default provider `{0}` is not registered")]
    MissingDefault(String),
}

/// Read-only mapping from provider id to [`VerificationProvider`].
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    providers: Vec<VerificationProvider>,
    default_index: usize,
    /// `(source, target)`: specialization lookups of `source` use `target`.
    specialization: Option<(usize, usize)>,
}

impl ProviderRegistry {
    /// Build a registry, checking ids, placeholders and the default entry.
    pub fn new(
        providers: Vec<VerificationProvider>,
        default_id: &str,
    ) -> Result<Self, RegistryError> {
        for (i, provider) in providers.iter().enumerate() {
            if provider.id.is_empty() {
                return Err(RegistryError::EmptyId);
            }
            if providers[..i].iter().any(|p| p.id == provider.id) {
                return Err(RegistryError::DuplicateId(provider.id.clone()));
            }
            let found = placeholder_count(&provider.url_pattern);
            if found != 1 {
                return Err(RegistryError::Placeholder {
                    id: provider.id.clone(),
                    found,
                });
            }
        }

        let default_index = providers
            .iter()
            .position(|p| p.id == default_id)
            .ok_or_else(|| RegistryError::MissingDefault(default_id.to_string()))?;

        let mut registry = Self {
            providers,
            default_index,
            specialization: None,
        };
        registry.specialization = registry
            .index_of(DEFAULT_PROVIDER)
            .zip(registry.index_of(SPECIALIZATION_PROVIDER));
        Ok(registry)
    }

    /// The builtin provider set with `coursera` as default.
    pub fn builtin() -> Self {
        Self {
            providers: builtin_providers(),
            default_index: 0,
            specialization: Some((0, 1)),
        }
    }

    /// Builtin providers overlaid with the `[verification]` section.
    ///
    /// Entries with a builtin id replace it in place; new ids are appended
    /// in declaration order.
    pub fn from_config(config: &VerificationConfig) -> Result<Self, RegistryError> {
        let mut providers = builtin_providers();
        for entry in &config.providers {
            match providers.iter_mut().find(|p| p.id == entry.id) {
                Some(existing) => *existing = entry.clone(),
                None => providers.push(entry.clone()),
            }
        }
        Self::new(providers, &config.default)
    }

    /// Look up a provider by id.
    #[inline]
    pub fn lookup(&self, id: &str) -> Option<&VerificationProvider> {
        self.providers.iter().find(|p| p.id == id)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    /// The designated default provider.
    #[inline]
    pub fn default_provider(&self) -> &VerificationProvider {
        &self.providers[self.default_index]
    }

    #[inline]
    pub fn default_id(&self) -> &str {
        &self.default_provider().id
    }

    /// Providers in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &VerificationProvider> {
        self.providers.iter()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Display info for `id`, falling back to the default entry.
    pub fn provider_display_info(&self, id: Option<&str>) -> &VerificationProvider {
        id.and_then(|id| self.lookup(id))
            .unwrap_or_else(|| self.default_provider())
    }

    /// Specialization redirect target for `id`, if one is configured.
    pub(super) fn specialization_target(&self, id: &str) -> Option<&VerificationProvider> {
        let (source, target) = self.specialization?;
        (self.providers[source].id == id).then(|| &self.providers[target])
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.providers.iter().position(|p| p.id == id)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builtin providers in detection order.
fn builtin_providers() -> Vec<VerificationProvider> {
    const ICON_LINK: Option<&str> = Some("fas fa-external-link-alt");
    vec![
        VerificationProvider::new(
            DEFAULT_PROVIDER,
            "https://coursera.org",
            "https://coursera.org/verify/{verifyCode}",
            "Coursera",
            ICON_LINK,
        ),
        VerificationProvider::new(
            SPECIALIZATION_PROVIDER,
            "https://www.coursera.org",
            "https://www.coursera.org/account/accomplishments/professional-cert/{verifyCode}",
            "Coursera Professional Certificate",
            Some("fas fa-trophy"),
        ),
        VerificationProvider::new(
            "udemy",
            "https://udemy.com",
            "https://udemy.com/certificate/{verifyCode}",
            "Udemy",
            ICON_LINK,
        ),
        VerificationProvider::new(
            "edx",
            "https://edx.org",
            "https://courses.edx.org/certificates/{verifyCode}",
            "edX",
            ICON_LINK,
        ),
        VerificationProvider::new(
            "pluralsight",
            "https://pluralsight.com",
            "https://pluralsight.com/achievements/{verifyCode}",
            "Pluralsight",
            ICON_LINK,
        ),
        VerificationProvider::new(
            "linkedin",
            "https://linkedin.com",
            "https://linkedin.com/learning/certificates/{verifyCode}",
            "LinkedIn Learning",
            Some("fab fa-linkedin"),
        ),
        VerificationProvider::new(
            "codecademy",
            "https://codecademy.com",
            "https://codecademy.com/profiles/{verifyCode}/certificates",
            "Codecademy",
            ICON_LINK,
        ),
        VerificationProvider::new(
            "microsoft",
            "https://learn.microsoft.com",
            "https://learn.microsoft.com/api/credentials/share/{verifyCode}",
            "Microsoft Learn",
            Some("fab fa-microsoft"),
        ),
        VerificationProvider::new(
            "google",
            "https://googlecloudskillsboost.google",
            "https://googlecloudskillsboost.google/public_profiles/{verifyCode}",
            "Google Cloud Skills Boost",
            Some("fab fa-google"),
        ),
        VerificationProvider::new(
            "aws",
            "https://aws.amazon.com",
            "https://aws.amazon.com/verification/{verifyCode}",
            "AWS Training",
            Some("fab fa-aws"),
        ),
        VerificationProvider::new(
            "credly",
            "https://credly.com",
            "https://credly.com/badges/{verifyCode}",
            "Credly",
            Some("fas fa-award"),
        ),
        VerificationProvider::new(
            "platzi",
            "https://platzi.com",
            "https://platzi.com/p/{verifyCode}/diploma/detalle/",
            "Platzi",
            Some("fas fa-graduation-cap"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(id: &str, pattern: &str) -> VerificationProvider {
        VerificationProvider::new(id, "https://custom.test", pattern, "Custom", None)
    }

    #[test]
    fn test_builtin_matches_validated_construction() {
        let builtin = ProviderRegistry::builtin();
        let checked = ProviderRegistry::new(builtin_providers(), DEFAULT_PROVIDER).unwrap();

        let ids: Vec<_> = builtin.iter().map(|p| p.id.as_str()).collect();
        let checked_ids: Vec<_> = checked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, checked_ids);
        assert_eq!(builtin.default_id(), checked.default_id());
        assert_eq!(builtin.specialization, checked.specialization);
    }

    #[test]
    fn test_builtin_order() {
        let registry = ProviderRegistry::builtin();
        let ids: Vec<_> = registry.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "coursera",
                "coursera-specialization",
                "udemy",
                "edx",
                "pluralsight",
                "linkedin",
                "codecademy",
                "microsoft",
                "google",
                "aws",
                "credly",
                "platzi",
            ]
        );
        assert_eq!(registry.len(), 12);
        assert_eq!(registry.default_id(), "coursera");
    }

    #[test]
    fn test_every_builtin_pattern_has_one_placeholder() {
        for provider in ProviderRegistry::builtin().iter() {
            assert_eq!(
                placeholder_count(&provider.url_pattern),
                1,
                "bad pattern for {}",
                provider.id
            );
        }
    }

    #[test]
    fn test_new_rejects_missing_placeholder() {
        let mut providers = builtin_providers();
        providers.push(custom("broken", "https://custom.test/static"));
        let err = ProviderRegistry::new(providers, DEFAULT_PROVIDER).unwrap_err();
        assert_eq!(
            err,
            RegistryError::Placeholder {
                id: "broken".into(),
                found: 0
            }
        );
    }

    #[test]
    fn test_new_rejects_double_placeholder() {
        let providers = vec![custom("x", "https://c.test/{verifyCode}/{verifyCode}")];
        assert!(matches!(
            ProviderRegistry::new(providers, "x"),
            Err(RegistryError::Placeholder { found: 2, .. })
        ));
    }

    #[test]
    fn test_new_rejects_duplicate_and_empty_ids() {
        let providers = vec![
            custom("x", "https://c.test/{verifyCode}"),
            custom("x", "https://d.test/{verifyCode}"),
        ];
        assert_eq!(
            ProviderRegistry::new(providers, "x").unwrap_err(),
            RegistryError::DuplicateId("x".into())
        );

        let providers = vec![custom("", "https://c.test/{verifyCode}")];
        assert_eq!(
            ProviderRegistry::new(providers, "").unwrap_err(),
            RegistryError::EmptyId
        );
    }

    #[test]
    fn test_new_requires_default() {
        let providers = vec![custom("x", "https://c.test/{verifyCode}")];
        assert_eq!(
            ProviderRegistry::new(providers, "coursera").unwrap_err(),
            RegistryError::MissingDefault("coursera".into())
        );
    }

    #[test]
    fn test_registry_without_specialization_entry() {
        let providers = vec![custom("x", "https://c.test/{verifyCode}")];
        let registry = ProviderRegistry::new(providers, "x").unwrap();
        assert!(registry.specialization.is_none());
        assert!(registry.specialization_target("x").is_none());
    }

    #[test]
    fn test_display_info_fallback() {
        let registry = ProviderRegistry::builtin();
        assert_eq!(registry.provider_display_info(Some("udemy")).display_name, "Udemy");
        assert_eq!(registry.provider_display_info(None).id, "coursera");
        assert_eq!(
            registry.provider_display_info(Some("nope")).display_name,
            "Coursera"
        );
    }

    #[test]
    fn test_from_config_appends_and_replaces() {
        let config = VerificationConfig {
            default: "udemy".into(),
            providers: vec![
                custom("school", "https://custom.test/cert/{verifyCode}"),
                VerificationProvider::new(
                    "udemy",
                    "https://www.udemy.com",
                    "https://www.udemy.com/certificate/{verifyCode}/",
                    "Udemy",
                    None,
                ),
            ],
        };
        let registry = ProviderRegistry::from_config(&config).unwrap();

        assert_eq!(registry.len(), 13);
        assert_eq!(registry.default_id(), "udemy");
        // Replacement keeps position, new ids go last
        assert_eq!(registry.iter().nth(2).unwrap().base_url, "https://www.udemy.com");
        assert_eq!(registry.iter().last().unwrap().id, "school");
    }

    #[test]
    fn test_from_config_default_section_is_builtin() {
        let registry = ProviderRegistry::from_config(&VerificationConfig::default()).unwrap();
        assert_eq!(registry.len(), 12);
        assert_eq!(registry.default_id(), DEFAULT_PROVIDER);
        assert_eq!(registry.specialization, Some((0, 1)));
    }
}

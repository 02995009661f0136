//! Provider auto-detection from a verification URL or partner names.

use super::registry::ProviderRegistry;

/// Partner-name substrings mapped to provider ids, checked in order.
///
/// Meta, IBM and university courses are hosted on Coursera.
const PARTNER_RULES: &[(&str, &str)] = &[
    ("microsoft", "microsoft"),
    ("google", "google"),
    ("amazon", "aws"),
    ("aws", "aws"),
    ("meta", "coursera"),
    ("facebook", "coursera"),
    ("ibm", "coursera"),
    ("university", "coursera"),
    ("credly", "credly"),
    ("platzi", "platzi"),
];

impl ProviderRegistry {
    /// Detect the provider id for a credential.
    ///
    /// A verification URL is matched against non-empty base URLs in registry
    /// order. Failing that, the first partner name is matched against
    /// [`PARTNER_RULES`]. Anything else yields the default id.
    pub fn detect_provider<'a, S: AsRef<str>>(
        &'a self,
        partner_names: &[S],
        verification_url: Option<&str>,
    ) -> &'a str {
        if let Some(url) = verification_url.filter(|u| !u.is_empty())
            && let Some(provider) = self
                .iter()
                .find(|p| !p.base_url.is_empty() && url.contains(p.base_url.as_str()))
        {
            return &provider.id;
        }

        let first_partner = partner_names
            .first()
            .map(|name| name.as_ref().to_lowercase())
            .unwrap_or_default();

        PARTNER_RULES
            .iter()
            .find(|(needle, _)| first_partner.contains(needle))
            .map(|(_, provider)| *provider)
            .filter(|id| self.contains(id))
            .unwrap_or_else(|| self.default_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VerificationConfig;
    use crate::verify::VerificationProvider;

    #[test]
    fn test_detect_from_partner_names() {
        let registry = ProviderRegistry::builtin();
        assert_eq!(registry.detect_provider(&["Microsoft"], None), "microsoft");
        assert_eq!(registry.detect_provider(&["Google Cloud"], None), "google");
        assert_eq!(registry.detect_provider(&["Amazon Web Services"], None), "aws");
        assert_eq!(registry.detect_provider(&["AWS"], None), "aws");
        assert_eq!(registry.detect_provider(&["Meta"], None), "coursera");
        assert_eq!(registry.detect_provider(&["IBM"], None), "coursera");
        assert_eq!(registry.detect_provider(&["Credly"], None), "credly");
        assert_eq!(registry.detect_provider(&["Platzi"], None), "platzi");
        assert_eq!(
            registry.detect_provider(&["Some Random University"], None),
            "coursera"
        );
    }

    #[test]
    fn test_detect_defaults() {
        let registry = ProviderRegistry::builtin();
        assert_eq!(registry.detect_provider(&["Unrelated Org"], None), "coursera");

        let empty: [&str; 0] = [];
        assert_eq!(registry.detect_provider(&empty, None), "coursera");
    }

    #[test]
    fn test_detect_uses_first_partner_only() {
        let registry = ProviderRegistry::builtin();
        let partners = vec!["Unrelated Org".to_string(), "Microsoft".to_string()];
        assert_eq!(registry.detect_provider(&partners, None), "coursera");
    }

    #[test]
    fn test_rule_order_wins() {
        // "google" is checked before "university"
        let registry = ProviderRegistry::builtin();
        assert_eq!(
            registry.detect_provider(&["Google University Program"], None),
            "google"
        );
    }

    #[test]
    fn test_detect_from_url() {
        let registry = ProviderRegistry::builtin();
        assert_eq!(
            registry.detect_provider(&["Microsoft"], Some("https://udemy.com/certificate/UC-1")),
            "udemy"
        );
        assert_eq!(
            registry.detect_provider(
                &["Unrelated"],
                Some("https://www.coursera.org/account/accomplishments/verify/X")
            ),
            "coursera-specialization"
        );
    }

    #[test]
    fn test_unmatched_url_falls_through_to_names() {
        let registry = ProviderRegistry::builtin();
        assert_eq!(
            registry.detect_provider(&["Platzi"], Some("https://unknown.test/cert/1")),
            "platzi"
        );
    }

    #[test]
    fn test_empty_base_url_never_matches() {
        let config = VerificationConfig {
            providers: vec![VerificationProvider::new(
                "school",
                "",
                "https://s.test/{verifyCode}",
                "School",
                None,
            )],
            ..Default::default()
        };
        let registry = ProviderRegistry::from_config(&config).unwrap();
        assert_eq!(
            registry.detect_provider(&["Microsoft"], Some("https://cert.efset.org/x")),
            "microsoft"
        );
    }

    #[test]
    fn test_first_declared_base_url_wins() {
        let config = VerificationConfig {
            providers: vec![VerificationProvider::new(
                "udemy-business",
                "https://udemy.com",
                "https://udemy.com/business/{verifyCode}",
                "Udemy Business",
                None,
            )],
            ..Default::default()
        };
        let registry = ProviderRegistry::from_config(&config).unwrap();
        assert_eq!(
            registry.detect_provider(&["x"], Some("https://udemy.com/certificate/1")),
            "udemy"
        );
    }

    #[test]
    fn test_custom_provider_detected_by_url() {
        let config = VerificationConfig {
            providers: vec![VerificationProvider::new(
                "school",
                "https://school.test",
                "https://school.test/c/{verifyCode}",
                "School",
                None,
            )],
            ..Default::default()
        };
        let registry = ProviderRegistry::from_config(&config).unwrap();
        assert_eq!(
            registry.detect_provider(&["x"], Some("https://school.test/c/99")),
            "school"
        );
    }
}

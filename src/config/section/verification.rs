//! `[verification]` configuration.
//!
//! Adds or replaces verification providers on top of the builtin registry.
//!
//! # Example
//!
//! ```toml
//! [verification]
//! default = "coursera"
//!
//! [[verification.providers]]
//! id = "school"
//! base_url = "https://certs.school.edu"
//! url_pattern = "https://certs.school.edu/verify/{verifyCode}"
//! display_name = "School Certificates"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, is_valid_url};
use crate::verify::{DEFAULT_PROVIDER, ProviderRegistry, VerificationProvider, placeholder_count};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Provider used when a record names none or an unknown one.
    pub default: String,

    /// Extra providers, appended after the builtin set in declaration order.
    pub providers: Vec<VerificationProvider>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_PROVIDER.into(),
            providers: Vec::new(),
        }
    }
}

impl VerificationConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, provider) in self.providers.iter().enumerate() {
            if provider.id.is_empty() {
                diag.error(
                    FieldPath::indexed("verification.providers", i, "id"),
                    "provider id must not be empty",
                );
            } else if self.providers[..i].iter().any(|p| p.id == provider.id) {
                diag.error(
                    FieldPath::indexed("verification.providers", i, "id"),
                    format!("duplicate provider id `{}`", provider.id),
                );
            }

            // an empty base URL would match every verification URL
            if provider.base_url.is_empty() || !is_valid_url(&provider.base_url) {
                diag.error_with_hint(
                    FieldPath::indexed("verification.providers", i, "base_url"),
                    format!("invalid base URL `{}`", provider.base_url),
                    "e.g. \"https://example.com\"",
                );
            }

            let found = placeholder_count(&provider.url_pattern);
            if found != 1 {
                diag.error_with_hint(
                    FieldPath::indexed("verification.providers", i, "url_pattern"),
                    format!("expected exactly one {{verifyCode}}, found {found}"),
                    "e.g. \"https://example.com/verify/{verifyCode}\"",
                );
            }
        }

        let known = ProviderRegistry::builtin().contains(&self.default)
            || self.providers.iter().any(|p| p.id == self.default);
        if !known {
            diag.error(
                FieldPath::new("verification.default"),
                format!("unknown provider `{}`", self.default),
            );
        }
    }
}

//! Verification URL resolution.
//!
//! Precedence: a non-empty custom template wins, then the requested
//! provider, then the registry default. Resolution never fails; an unknown
//! provider id is logged and replaced by the default.

use super::provider::{VerificationProvider, substitute};
use super::registry::ProviderRegistry;
use crate::log;

impl ProviderRegistry {
    /// Resolve the verification URL of a certification.
    pub fn resolve_verification_url(
        &self,
        verify_code: &str,
        provider_id: Option<&str>,
        custom_url: Option<&str>,
    ) -> String {
        if let Some(template) = non_empty(custom_url) {
            return substitute(template, verify_code);
        }
        self.resolve_provider(provider_id).render(verify_code)
    }

    /// Resolve the verification URL of a specialization.
    ///
    /// Same as [`resolve_verification_url`](Self::resolve_verification_url),
    /// except that the default provider is redirected to its
    /// professional-certificate entry.
    pub fn resolve_specialization_verification_url(
        &self,
        verify_code: &str,
        provider_id: Option<&str>,
        custom_url: Option<&str>,
    ) -> String {
        if let Some(template) = non_empty(custom_url) {
            return substitute(template, verify_code);
        }

        let id = non_empty(provider_id).unwrap_or_else(|| self.default_id());
        match self.specialization_target(id) {
            Some(target) => target.render(verify_code),
            None => self.resolve_provider(Some(id)).render(verify_code),
        }
    }

    /// Provider used for `provider_id`; unknown ids fall back to the default.
    ///
    /// An empty id counts as absent.
    pub fn resolve_provider(&self, provider_id: Option<&str>) -> &VerificationProvider {
        let Some(id) = non_empty(provider_id) else {
            return self.default_provider();
        };

        self.lookup(id).unwrap_or_else(|| {
            log!(
                "warning";
                "unknown verification provider: {}. using default: {}",
                id,
                self.default_id()
            );
            self.default_provider()
        })
    }
}

#[inline]
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

//! Verification provider entries and URL templating.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with a credential's verify code.
pub const PLACEHOLDER: &str = "{verifyCode}";

/// A platform that issues credentials and hosts their verification pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationProvider {
    /// Registry key (e.g. "coursera", "udemy").
    pub id: String,

    /// Root URL matched against custom verification URLs during detection.
    pub base_url: String,

    /// Template containing exactly one `{verifyCode}` placeholder.
    pub url_pattern: String,

    /// Human-readable label.
    pub display_name: String,

    /// Opaque icon reference for the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl VerificationProvider {
    pub fn new(
        id: impl Into<String>,
        base_url: impl Into<String>,
        url_pattern: impl Into<String>,
        display_name: impl Into<String>,
        icon: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            base_url: base_url.into(),
            url_pattern: url_pattern.into(),
            display_name: display_name.into(),
            icon: icon.map(str::to_string),
        }
    }

    /// Render this provider's verification URL for `verify_code`.
    #[inline]
    pub fn render(&self, verify_code: &str) -> String {
        substitute(&self.url_pattern, verify_code)
    }
}

/// Replace every `{verifyCode}` in `template` with `verify_code`.
///
/// Custom templates and registry patterns share this policy.
#[inline]
pub fn substitute(template: &str, verify_code: &str) -> String {
    template.replace(PLACEHOLDER, verify_code)
}

/// Count placeholder occurrences in a template.
#[inline]
pub fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

//! `[seo]` configuration.
//!
//! # Example
//!
//! ```toml
//! [seo]
//! title = "Alice - Portfolio"
//! title_template = "{name} | {role}"
//! keywords = ["Rust", "Backend"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, title::TEMPLATE_PLACEHOLDERS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Static page title, used when no template is set.
    pub title: String,
    /// Title template; see [`crate::config::title`] for placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_template: Option<String>,
    pub description: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            title: "Your Name - Portfolio".into(),
            title_template: None,
            description: "Personal portfolio and professional credentials.".into(),
            keywords: vec!["Software Developer".into(), "Portfolio".into()],
            og_image: None,
        }
    }
}

impl SeoConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        static RE_PLACEHOLDER: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\{([A-Za-z]+)\}").unwrap());

        let Some(template) = &self.title_template else {
            return;
        };

        for caps in RE_PLACEHOLDER.captures_iter(template) {
            let name = &caps[0];
            if !TEMPLATE_PLACEHOLDERS.contains(&name) {
                diag.error_with_hint(
                    FieldPath::new("seo.title_template"),
                    format!("unknown placeholder `{name}`"),
                    format!("supported: {}", TEMPLATE_PLACEHOLDERS.join(", ")),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_known_placeholders_pass() {
        let config = test_parse_config(
            "[seo]\ntitle_template = \"{name} | {role} - {title} {shortDescription}\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.seo.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_unknown_placeholder_reported() {
        let config = test_parse_config("[seo]\ntitle_template = \"{name} @ {company}\"");
        let mut diag = ConfigDiagnostics::new();
        config.seo.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("{company}"));
    }
}

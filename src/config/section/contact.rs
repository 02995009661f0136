//! `[contact]` configuration.
//!
//! # Example
//!
//! ```toml
//! [contact]
//! email = "alice@example.com"
//! location = "Remote"
//!
//! [[contact.social]]
//! name = "GitHub"
//! url = "https://github.com/alice"
//! icon = "fab fa-github"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, util::is_valid_url};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Social links, replaced as a whole when overridden.
    pub social: Vec<SocialLink>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "you@example.com".into(),
            phone: None,
            location: Some("Available Worldwide".into()),
            social: vec![
                SocialLink::new("LinkedIn", "https://linkedin.com/in/you", "fab fa-linkedin", "#0077b5"),
                SocialLink::new("GitHub", "https://github.com/you", "fab fa-github", "#333"),
                SocialLink::new("Email", "mailto:you@example.com", "fas fa-envelope", "#ea4335"),
            ],
        }
    }
}

impl ContactConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !is_plausible_email(&self.email) {
            diag.error_with_hint(
                FieldPath::new("contact.email"),
                format!("invalid email address `{}`", self.email),
                "expected something like name@example.com",
            );
        }

        for (i, link) in self.social.iter().enumerate() {
            if !is_valid_url(&link.url) {
                diag.error(
                    FieldPath::indexed("contact.social", i, "url"),
                    format!("invalid url `{}`", link.url),
                );
            }
        }
    }
}

/// Minimal shape check: one `@` with text on both sides.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SocialLink {
    fn new(name: &str, url: &str, icon: &str, color: &str) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon: icon.into(),
            color: Some(color.into()),
        }
    }
}

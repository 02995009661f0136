//! `[personal]` configuration.
//!
//! # Example
//!
//! ```toml
//! [personal]
//! name = "Alice Example"
//! title = "Software Engineer"
//! availability = { status = true, text = "Open to work" }
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalConfig {
    /// Full name.
    pub name: String,
    /// Professional title, also used as `{role}` in title templates.
    pub title: String,
    pub short_description: String,
    /// Site-relative path of the profile photo.
    pub profile_image: String,
    pub availability: Availability,
}

impl Default for PersonalConfig {
    fn default() -> Self {
        Self {
            name: "Your Name".into(),
            title: "Software Developer".into(),
            short_description:
                "I build reliable software across web, desktop, and mobile platforms.".into(),
            profile_image: "/assets/images/profile-photo.jpg".into(),
            availability: Availability::default(),
        }
    }
}

impl PersonalConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("personal.name"),
                "name must not be empty",
                "set `name` under [personal]",
            );
        }
        if self.title.trim().is_empty() {
            diag.warn(FieldPath::new("personal.title"), "title is empty");
        }
    }
}

/// Availability badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Availability {
    pub status: bool,
    pub text: String,
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            status: true,
            text: "Available for new opportunities".into(),
        }
    }
}

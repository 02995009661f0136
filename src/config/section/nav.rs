//! `[[navigation]]` items.

use serde::{Deserialize, Serialize};

/// A single navigation entry (in-page anchor or URL).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    pub name: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl NavItem {
    fn new(name: &str, href: &str, icon: &str) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            icon: Some(icon.into()),
        }
    }
}

/// Default navigation: one entry per page section.
pub fn default_navigation() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "#home", "fas fa-home"),
        NavItem::new("About", "#about", "fas fa-user"),
        NavItem::new("Projects", "#projects", "fas fa-briefcase"),
        NavItem::new("Education", "#education", "fas fa-graduation-cap"),
        NavItem::new("Contact", "#contact", "fas fa-envelope"),
    ]
}

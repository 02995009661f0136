//! `[about]` section: biography, stats and skill groups.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    /// Paragraphs of the biography.
    pub description: Vec<String>,
    pub stats: Vec<StatItem>,
    pub skills: Vec<SkillCategory>,
    pub profile_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationInfo>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            description: vec![
                "I am a developer who believes products should perform well and be easy to use."
                    .into(),
            ],
            stats: vec![
                StatItem::new("5+", "Years Exp", "Professional experience"),
                StatItem::new("20+", "Projects", "Completed successfully"),
            ],
            skills: vec![
                SkillCategory {
                    name: "Frontend".into(),
                    icon: "fas fa-code".into(),
                    color: "primary".into(),
                    skills: vec!["React".into(), "TypeScript".into()],
                },
                SkillCategory {
                    name: "Backend".into(),
                    icon: "fas fa-server".into(),
                    color: "accent".into(),
                    skills: vec!["Rust".into(), "SQL".into()],
                },
            ],
            profile_image: "/images/profile-photo.jpg".into(),
            location: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatItem {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StatItem {
    fn new(value: &str, label: &str, description: &str) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: Some(description.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub name: String,
    pub icon: String,
    /// Theme color key ("primary", "accent", ...).
    pub color: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationInfo {
    pub country: String,
    /// ISO 3166-1 alpha-2 code.
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

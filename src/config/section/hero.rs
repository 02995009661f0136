//! `[hero]` banner configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub greeting: String,
    /// Title lines, rendered in order.
    pub title: Vec<String>,
    pub description: String,
    pub buttons: Vec<HeroButton>,
    pub background_effects: bool,
    pub scroll_indicator: bool,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello, I'm".into(),
            title: vec!["Software Developer".into()],
            description: "I build reliable software across web, desktop, and mobile platforms."
                .into(),
            buttons: vec![
                HeroButton {
                    text: "View My Work".into(),
                    href: "#projects".into(),
                    kind: ButtonKind::Primary,
                    icon: Some("fas fa-arrow-right".into()),
                },
                HeroButton {
                    text: "Get In Touch".into(),
                    href: "#contact".into(),
                    kind: ButtonKind::Secondary,
                    icon: Some("fas fa-paper-plane".into()),
                },
            ],
            background_effects: true,
            scroll_indicator: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroButton {
    pub text: String,
    pub href: String,
    #[serde(rename = "type")]
    pub kind: ButtonKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Button style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_button_type_parsing() {
        let config = test_parse_config(
            "[[hero.buttons]]\ntext = \"CV\"\nhref = \"/cv.pdf\"\ntype = \"secondary\"",
        );
        assert_eq!(config.hero.buttons.len(), 1);
        assert_eq!(config.hero.buttons[0].kind, ButtonKind::Secondary);
        assert!(config.hero.background_effects);
    }

    #[test]
    fn test_invalid_button_type_rejected() {
        let result = crate::config::PortfolioConfig::parse(
            "[[hero.buttons]]\ntext = \"x\"\ntype = \"tertiary\"",
        );
        assert!(result.is_err());
    }
}

//! `[theme]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [theme.fonts]
//! display = "Poppins"
//!
//! [theme.colors.primary]
//! 500 = "#3b82f6"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub colors: ThemeColors,
    pub fonts: FontsConfig,
    pub animations: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            colors: ThemeColors::default(),
            fonts: FontsConfig::default(),
            animations: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: ColorScale,
    pub accent: ColorScale,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: ColorScale::from_shades([
                "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb",
                "#1d4ed8", "#1e40af", "#1e3a8a",
            ]),
            accent: ColorScale::from_shades([
                "#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669",
                "#047857", "#065f46", "#064e3b",
            ]),
        }
    }
}

/// Ten-step color scale keyed `50`, `100` .. `900`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScale {
    #[serde(rename = "50")]
    pub shade_50: String,
    #[serde(rename = "100")]
    pub shade_100: String,
    #[serde(rename = "200")]
    pub shade_200: String,
    #[serde(rename = "300")]
    pub shade_300: String,
    #[serde(rename = "400")]
    pub shade_400: String,
    #[serde(rename = "500")]
    pub shade_500: String,
    #[serde(rename = "600")]
    pub shade_600: String,
    #[serde(rename = "700")]
    pub shade_700: String,
    #[serde(rename = "800")]
    pub shade_800: String,
    #[serde(rename = "900")]
    pub shade_900: String,
}

impl ColorScale {
    fn from_shades(shades: [&str; 10]) -> Self {
        let [s50, s100, s200, s300, s400, s500, s600, s700, s800, s900] = shades.map(String::from);
        Self {
            shade_50: s50,
            shade_100: s100,
            shade_200: s200,
            shade_300: s300,
            shade_400: s400,
            shade_500: s500,
            shade_600: s600,
            shade_700: s700,
            shade_800: s800,
            shade_900: s900,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    pub display: String,
    pub body: String,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            display: "Poppins".into(),
            body: "Inter".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_single_shade_override() {
        let config = test_parse_config("[theme.colors.primary]\n500 = \"#ff0000\"");
        assert_eq!(config.theme.colors.primary.shade_500, "#ff0000");
        assert_eq!(config.theme.colors.primary.shade_50, "#eff6ff");
        assert_eq!(config.theme.colors.accent.shade_500, "#10b981");
    }

    #[test]
    fn test_fonts_and_animations() {
        let config = test_parse_config("[theme]\nanimations = false\nfonts = { body = \"Roboto\" }");
        assert!(!config.theme.animations);
        assert_eq!(config.theme.fonts.body, "Roboto");
        assert_eq!(config.theme.fonts.display, "Poppins");
    }
}

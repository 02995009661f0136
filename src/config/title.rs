//! Page title generation.
//!
//! `seo.title_template` supports these placeholders, each replaced
//! everywhere it appears:
//!
//! | Placeholder          | Value                          |
//! |----------------------|--------------------------------|
//! | `{name}`             | `personal.name`                |
//! | `{title}`, `{role}`  | `personal.title`               |
//! | `{shortDescription}` | `personal.short_description`   |

use super::PortfolioConfig;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Placeholders accepted in `seo.title_template`.
pub const TEMPLATE_PLACEHOLDERS: &[&str] = &["{name}", "{title}", "{role}", "{shortDescription}"];

/// Default maximum title length for search engines.
pub const SEO_TITLE_MAX_LEN: usize = 60;

/// Title layout for [`professional_title`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TitleFormat {
    /// `Name - Role | Portfolio`
    #[default]
    Standard,
    /// `Name | Role`
    Modern,
    /// `Name • Role • Portfolio`
    Creative,
    /// `Name - Role`
    Simple,
}

/// Title from `seo.title_template`, or `seo.title` when unset.
pub fn dynamic_title(config: &PortfolioConfig) -> String {
    let personal = &config.personal;
    match &config.seo.title_template {
        Some(template) => template
            .replace("{name}", &personal.name)
            .replace("{title}", &personal.title)
            .replace("{role}", &personal.title)
            .replace("{shortDescription}", &personal.short_description),
        None => config.seo.title.clone(),
    }
}

pub fn professional_title(name: &str, role: &str, format: TitleFormat) -> String {
    match format {
        TitleFormat::Standard => format!("{name} - {role} | Portfolio"),
        TitleFormat::Modern => format!("{name} | {role}"),
        TitleFormat::Creative => format!("{name} • {role} • Portfolio"),
        TitleFormat::Simple => format!("{name} - {role}"),
    }
}

/// Candidate titles built from `[personal]`.
pub fn title_suggestions(config: &PortfolioConfig) -> Vec<String> {
    let name = &config.personal.name;
    let title = &config.personal.title;

    let mut suggestions: Vec<String> = [
        TitleFormat::Standard,
        TitleFormat::Modern,
        TitleFormat::Creative,
        TitleFormat::Simple,
    ]
    .into_iter()
    .map(|format| professional_title(name, title, format))
    .collect();

    suggestions.extend([
        format!("{name} - Professional Portfolio"),
        format!("{name} | {title} Portfolio"),
        format!("Portfolio of {name}"),
        format!("{name} • {title}"),
    ]);
    suggestions
}

/// Dynamic title shortened to fit `max_len` characters.
///
/// Falls back to shorter name/title combinations, then truncates with `...`.
pub fn seo_title(config: &PortfolioConfig, max_len: usize) -> String {
    let dynamic = dynamic_title(config);
    if char_len(&dynamic) <= max_len {
        return dynamic;
    }

    let name = &config.personal.name;
    let title = &config.personal.title;
    let alternatives = [
        format!("{name} - {title}"),
        format!("{name} | {title}"),
        format!("{name} Portfolio"),
        name.clone(),
    ];
    if let Some(fit) = alternatives.into_iter().find(|alt| char_len(alt) <= max_len) {
        return fit;
    }

    truncate(&dynamic, max_len)
}

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn truncate(s: &str, max_len: usize) -> String {
    const ELLIPSIS: &str = "...";
    if max_len < ELLIPSIS.len() {
        return s.chars().take(max_len).collect();
    }
    let mut out: String = s.chars().take(max_len - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn config_with(name: &str, title: &str, extra: &str) -> PortfolioConfig {
        test_parse_config(&format!(
            "[personal]\nname = \"{name}\"\ntitle = \"{title}\"\nshort_description = \"Builds things\"\n{extra}"
        ))
    }

    #[test]
    fn test_dynamic_title_static_fallback() {
        let config = config_with("Alice", "Engineer", "[seo]\ntitle = \"Static\"");
        assert_eq!(dynamic_title(&config), "Static");
    }

    #[test]
    fn test_dynamic_title_template() {
        let config = config_with(
            "Alice",
            "Engineer",
            "[seo]\ntitle_template = \"{name} | {role} | {name} - {shortDescription}\"",
        );
        assert_eq!(
            dynamic_title(&config),
            "Alice | Engineer | Alice - Builds things"
        );
    }

    #[test]
    fn test_professional_title_formats() {
        assert_eq!(
            professional_title("A", "Dev", TitleFormat::Standard),
            "A - Dev | Portfolio"
        );
        assert_eq!(professional_title("A", "Dev", TitleFormat::Modern), "A | Dev");
        assert_eq!(
            professional_title("A", "Dev", TitleFormat::Creative),
            "A • Dev • Portfolio"
        );
        assert_eq!(professional_title("A", "Dev", TitleFormat::Simple), "A - Dev");
    }

    #[test]
    fn test_title_suggestions() {
        let config = config_with("Alice", "Engineer", "");
        let suggestions = title_suggestions(&config);
        assert_eq!(suggestions.len(), 8);
        assert_eq!(suggestions[0], "Alice - Engineer | Portfolio");
        assert_eq!(suggestions[6], "Portfolio of Alice");
        assert_eq!(suggestions[7], "Alice • Engineer");
    }

    #[test]
    fn test_seo_title_fits() {
        let config = config_with("Alice", "Engineer", "[seo]\ntitle = \"Alice - Portfolio\"");
        assert_eq!(seo_title(&config, SEO_TITLE_MAX_LEN), "Alice - Portfolio");
    }

    #[test]
    fn test_seo_title_alternative() {
        let config = config_with(
            "Alice",
            "Engineer",
            "[seo]\ntitle_template = \"{name} - {title} - {shortDescription} - {shortDescription}\"",
        );
        assert_eq!(seo_title(&config, 20), "Alice - Engineer");
        assert_eq!(seo_title(&config, 10), "Alice");
    }

    #[test]
    fn test_seo_title_truncates() {
        let config = config_with(
            "Alexandria Montgomery-Fitzgerald",
            "Engineer",
            "[seo]\ntitle = \"Alexandria Montgomery-Fitzgerald - Portfolio\"",
        );
        let title = seo_title(&config, 12);
        assert_eq!(title, "Alexandri...");
        assert_eq!(title.chars().count(), 12);
    }

    #[test]
    fn test_seo_title_counts_characters() {
        let config = config_with("Zoë", "Ingénieure", "[seo]\ntitle_template = \"{name} • {role}\"");
        // 16 characters, more bytes
        assert_eq!(seo_title(&config, 16), "Zoë • Ingénieure");
    }

    #[test]
    fn test_truncate_tiny_limit() {
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("abcdef", 3), "...");
    }
}

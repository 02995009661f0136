//! Portfolio configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # ConfigError, diagnostics, FieldPath
//! ├── merge          # deep_merge over serde_json values
//! ├── title          # Page title generation
//! └── mod.rs         # PortfolioConfig (this file)
//! ```
//!
//! # Loading
//!
//! The user's file is a partial override. It is parsed into a raw value,
//! deep-merged onto the serialized defaults, and only then deserialized into
//! [`PortfolioConfig`]. A key the user leaves out therefore keeps its default
//! even when a sibling in the same table is overridden.
//!
//! | Section            | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | `[personal]`       | Name, title, availability                    |
//! | `[contact]`        | Email, location, social links                |
//! | `[[navigation]]`   | Navigation entries                           |
//! | `[hero]`           | Banner                                       |
//! | `[about]`          | Biography, stats, skills                     |
//! | `[projects]`       | Featured projects                            |
//! | `[education]`      | Certification/specialization data sources    |
//! | `[theme]`          | Colors, fonts                                |
//! | `[seo]`            | Title and title template                     |
//! | `[verification]`   | Extra providers and default provider         |

pub mod merge;
pub mod section;
pub mod title;
pub mod types;
mod util;

pub use merge::{deep_merge, deep_merge_all};
pub use section::{
    AboutConfig, ContactConfig, EducationConfig, HeroConfig, NavItem, PersonalConfig,
    ProjectsConfig, SeoConfig, ThemeConfig, VerificationConfig, default_navigation,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, is_valid_url};

use crate::verify::ProviderRegistry;
use crate::{debug, log};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up when `-C` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "folio.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory containing the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub personal: PersonalConfig,
    pub contact: ContactConfig,
    pub navigation: Vec<NavItem>,
    pub hero: HeroConfig,
    pub about: AboutConfig,
    pub projects: ProjectsConfig,
    pub education: EducationConfig,
    pub theme: ThemeConfig,
    pub seo: SeoConfig,
    pub verification: VerificationConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            personal: PersonalConfig::default(),
            contact: ContactConfig::default(),
            navigation: default_navigation(),
            hero: HeroConfig::default(),
            about: AboutConfig::default(),
            projects: ProjectsConfig::default(),
            education: EducationConfig::default(),
            theme: ThemeConfig::default(),
            seo: SeoConfig::default(),
            verification: VerificationConfig::default(),
        }
    }
}

impl PortfolioConfig {
    /// Locate `config_name` upward from cwd and load it.
    ///
    /// A missing [`DEFAULT_CONFIG_NAME`] means defaults; any other missing
    /// name is an error.
    pub fn discover(config_name: &Path) -> Result<Self, ConfigError> {
        match find_config_file(config_name) {
            Some(path) => Self::load(&path),
            None if config_name == Path::new(DEFAULT_CONFIG_NAME) => {
                debug!("config"; "{} not found, using defaults", config_name.display());
                Ok(Self::default())
            }
            None => Err(ConfigError::NotFound(config_name.to_path_buf())),
        }
    }

    /// Load, merge onto defaults, and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.validate()?;

        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse a TOML override, ignoring unknown fields.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::parse_with_ignored(content).map(|(config, _)| config)
    }

    /// Parse a TOML override, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let table: toml::Table = toml::from_str(content)?;
        let overlay = serde_json::to_value(table)?;
        Self::merge_with_ignored(&overlay)
    }

    /// Effective configuration for a partial override value.
    ///
    /// `Value::Null` or an empty object yields the defaults.
    pub fn from_override(overlay: &Value) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::merge_with_ignored(overlay)?;
        for field in &ignored {
            debug!("config"; "ignoring unknown field `{}`", field);
        }
        Ok(config)
    }

    fn merge_with_ignored(overlay: &Value) -> Result<(Self, Vec<String>), ConfigError> {
        let base = serde_json::to_value(Self::default())?;
        let merged = match overlay {
            Value::Null => base,
            _ => deep_merge(&base, overlay),
        };

        let mut ignored = Vec::new();
        let config = serde_ignored::deserialize(merged, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate every section.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.personal.validate(&mut diag);
        self.contact.validate(&mut diag);
        self.projects.validate(&mut diag);
        self.seo.validate(&mut diag);
        self.verification.validate(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Provider registry with `[verification]` applied.
    pub fn registry(&self) -> Result<ProviderRegistry, ConfigError> {
        Ok(ProviderRegistry::from_config(&self.verification)?)
    }

    /// Join a path with the config directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    pub fn certifications_path(&self) -> PathBuf {
        self.root_join(&self.education.certifications.data_source)
    }

    pub fn specializations_path(&self) -> PathBuf {
        self.root_join(&self.education.specializations.data_source)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a config override on top of the defaults.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> PortfolioConfig {
    let (parsed, ignored) = PortfolioConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_override_is_default() {
        assert_eq!(test_parse_config(""), PortfolioConfig::default());
        assert_eq!(
            PortfolioConfig::from_override(&json!({})).unwrap(),
            PortfolioConfig::default()
        );
        assert_eq!(
            PortfolioConfig::from_override(&Value::Null).unwrap(),
            PortfolioConfig::default()
        );
    }

    #[test]
    fn test_partial_override_keeps_siblings() {
        let config = test_parse_config("[personal]\nname = \"Alice\"");
        let defaults = PortfolioConfig::default();

        assert_eq!(config.personal.name, "Alice");
        assert_eq!(config.personal.title, defaults.personal.title);
        assert_eq!(config.personal.availability, defaults.personal.availability);
        assert_eq!(config.contact, defaults.contact);
    }

    #[test]
    fn test_nested_override() {
        let config = test_parse_config("[personal.availability]\nstatus = false");
        assert!(!config.personal.availability.status);
        assert_eq!(
            config.personal.availability.text,
            PortfolioConfig::default().personal.availability.text
        );
    }

    #[test]
    fn test_sequence_replaced_wholesale() {
        let config = test_parse_config("[[navigation]]\nname = \"Home\"\nhref = \"#home\"");
        assert_eq!(config.navigation.len(), 1);
        assert_eq!(config.navigation[0].href, "#home");
    }

    #[test]
    fn test_from_override_value() {
        let config = PortfolioConfig::from_override(&json!({
            "seo": { "title_template": "{name} | {role}" },
            "theme": { "animations": false }
        }))
        .unwrap();

        assert_eq!(config.seo.title_template.as_deref(), Some("{name} | {role}"));
        assert_eq!(config.seo.title, PortfolioConfig::default().seo.title);
        assert!(!config.theme.animations);
    }

    #[test]
    fn test_from_override_type_mismatch() {
        let result = PortfolioConfig::from_override(&json!({ "personal": { "name": 42 } }));
        assert!(matches!(result, Err(ConfigError::Value(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let result = PortfolioConfig::parse("[personal\nname = \"Alice\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_datetime_where_string_expected() {
        let result = PortfolioConfig::parse("[personal]\nname = 1979-05-27");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[personal]\nname = \"Alice\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = PortfolioConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.personal.name, "Alice");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_default_validates() {
        assert!(PortfolioConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            "[personal]\nname = \"\"\n[contact]\nemail = \"nobody\"\n[verification]\ndefault = \"nowhere\"",
        );
        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PortfolioConfig::load(&dir.path().join("folio.toml"));
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_discover_missing_custom_name() {
        let name = Path::new("folio-nonexistent-7c1e.toml");
        assert!(matches!(
            PortfolioConfig::discover(name),
            Err(ConfigError::NotFound(path)) if path == name
        ));
    }

    #[test]
    fn test_load_sets_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "[personal]\nname = \"Alice\"").unwrap();

        let config = PortfolioConfig::load(&path).unwrap();
        assert_eq!(config.personal.name, "Alice");
        assert_eq!(config.root, dir.path());
        assert_eq!(
            config.certifications_path(),
            dir.path().join("data/certifications.json")
        );
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "[contact]\nemail = \"nobody\"").unwrap();

        assert!(matches!(
            PortfolioConfig::load(&path),
            Err(ConfigError::Diagnostics(_))
        ));
    }

    #[test]
    fn test_registry_includes_user_providers() {
        let config = test_parse_config(
            r#"
[[verification.providers]]
id = "school"
base_url = "https://certs.school.edu"
url_pattern = "https://certs.school.edu/verify/{verifyCode}"
display_name = "School"
"#,
        );
        let registry = config.registry().unwrap();
        assert!(registry.contains("school"));
        assert!(registry.contains("coursera"));
        assert_eq!(registry.default_id(), "coursera");
    }

    #[test]
    fn test_serialized_config_roundtrips_through_override() {
        let config = test_parse_config("[personal]\nname = \"Alice\"");
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(PortfolioConfig::from_override(&value).unwrap(), config);
    }
}

//! `[education]` configuration.
//!
//! # Example
//!
//! ```toml
//! [education.certifications]
//! data_source = "data/certifications.json"
//! search_enabled = true
//!
//! [education.specializations]
//! data_source = "data/specializations.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationConfig {
    pub title: String,
    pub description: String,
    /// Headline stats. Empty means computed from the credential data.
    pub stats: Vec<EducationStat>,
    pub certifications: CertificationsSource,
    pub specializations: SpecializationsSource,
}

impl Default for EducationConfig {
    fn default() -> Self {
        Self {
            title: "Education & Certifications".into(),
            description: "Continuous learning through industry-recognized programs".into(),
            stats: Vec::new(),
            certifications: CertificationsSource::default(),
            specializations: SpecializationsSource::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationStat {
    pub value: String,
    pub label: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationsSource {
    /// JSON data file, relative to the config file.
    pub data_source: PathBuf,
    pub search_enabled: bool,
    pub filter_enabled: bool,
}

impl Default for CertificationsSource {
    fn default() -> Self {
        Self {
            data_source: "data/certifications.json".into(),
            search_enabled: true,
            filter_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecializationsSource {
    /// JSON data file, relative to the config file.
    pub data_source: PathBuf,
}

impl Default for SpecializationsSource {
    fn default() -> Self {
        Self {
            data_source: "data/specializations.json".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_data_source_override() {
        let config = test_parse_config(
            "[education.certifications]\ndata_source = \"assets/certs.json\"",
        );
        assert_eq!(
            config.education.certifications.data_source,
            Path::new("assets/certs.json")
        );
        assert!(config.education.certifications.search_enabled);
        assert_eq!(
            config.education.specializations.data_source,
            Path::new("data/specializations.json")
        );
    }
}

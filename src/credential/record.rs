//! Credential records as stored in the data files.
//!
//! Certifications and specializations use different JSON shapes; both are
//! normalized into [`CredentialRecord`] at load time.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which dataset a record came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CredentialKind {
    #[default]
    #[value(alias = "cert")]
    Certification,
    #[value(alias = "spec")]
    Specialization,
}

impl CredentialKind {
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Certification => "certification",
            Self::Specialization => "specialization",
        }
    }
}

/// Issuing partner (university, company).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Certification entry (`partners: [{name, logo}]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    pub course_id: String,
    pub name: String,
    #[serde(default)]
    pub partners: Vec<Partner>,
    pub completion_date: i64,
    pub verify_code: String,
    #[serde(default)]
    pub distinction_level: Option<String>,
    #[serde(default)]
    pub verification_url: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
}

/// Specialization entry (`partnerNames: [..]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecializationEntry {
    pub specialization_id: String,
    pub name: String,
    #[serde(default)]
    pub partner_names: Vec<String>,
    pub completion_date: i64,
    pub verify_code: String,
    #[serde(default)]
    pub verification_url: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
}

/// A completed certification or specialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    pub kind: CredentialKind,
    pub id: String,
    pub name: String,
    pub partners: Vec<Partner>,
    /// Unix epoch milliseconds.
    pub completion_date: i64,
    pub verify_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinction_level: Option<String>,
    /// Explicit verification URL or template, overriding the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl CredentialRecord {
    pub fn partner_names(&self) -> Vec<&str> {
        self.partners.iter().map(|p| p.name.as_str()).collect()
    }

    /// First partner, or `"Unknown"`.
    pub fn primary_partner(&self) -> &str {
        self.partners.first().map_or("Unknown", |p| p.name.as_str())
    }
}

impl From<CertificationEntry> for CredentialRecord {
    fn from(entry: CertificationEntry) -> Self {
        Self {
            kind: CredentialKind::Certification,
            id: entry.course_id,
            name: entry.name,
            partners: entry.partners,
            completion_date: entry.completion_date,
            verify_code: entry.verify_code,
            distinction_level: entry.distinction_level,
            verification_url: entry.verification_url,
            provider: entry.provider,
        }
    }
}

impl From<SpecializationEntry> for CredentialRecord {
    fn from(entry: SpecializationEntry) -> Self {
        Self {
            kind: CredentialKind::Specialization,
            id: entry.specialization_id,
            name: entry.name,
            partners: entry
                .partner_names
                .into_iter()
                .map(|name| Partner { name, logo: None })
                .collect(),
            completion_date: entry.completion_date,
            verify_code: entry.verify_code,
            distinction_level: None,
            verification_url: entry.verification_url,
            provider: entry.provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certification_shape() {
        let entry: CertificationEntry = serde_json::from_str(
            r#"{
                "courseId": "abc",
                "name": "Data Structures and Algorithms",
                "partners": [{ "name": "Microsoft", "logo": "https://img.test/ms.png" }],
                "completionDate": 1746662400000,
                "verifyCode": "8I79HM72RQY9",
                "distinctionLevel": "NORMAL"
            }"#,
        )
        .unwrap();
        let record = CredentialRecord::from(entry);

        assert_eq!(record.kind, CredentialKind::Certification);
        assert_eq!(record.id, "abc");
        assert_eq!(record.partner_names(), ["Microsoft"]);
        assert_eq!(record.distinction_level.as_deref(), Some("NORMAL"));
        assert!(record.provider.is_none());
    }

    #[test]
    fn test_specialization_shape() {
        let entry: SpecializationEntry = serde_json::from_str(
            r#"{
                "specializationId": "xyz",
                "name": "Microsoft Front-End Developer",
                "partnerNames": ["Microsoft"],
                "provider": "coursera-specialization",
                "completionDate": 1752105600000,
                "verifyCode": "6PRWOAM6GOSD"
            }"#,
        )
        .unwrap();
        let record = CredentialRecord::from(entry);

        assert_eq!(record.kind, CredentialKind::Specialization);
        assert_eq!(record.primary_partner(), "Microsoft");
        assert!(record.partners[0].logo.is_none());
        assert_eq!(record.provider.as_deref(), Some("coursera-specialization"));
    }

    #[test]
    fn test_primary_partner_unknown() {
        let entry: SpecializationEntry = serde_json::from_str(
            r#"{ "specializationId": "x", "name": "n", "completionDate": 0, "verifyCode": "c" }"#,
        )
        .unwrap();
        assert_eq!(CredentialRecord::from(entry).primary_partner(), "Unknown");
    }

    #[test]
    fn test_serialized_record_is_camel_case() {
        let entry: SpecializationEntry = serde_json::from_str(
            r#"{ "specializationId": "x", "name": "n", "partnerNames": ["P"], "completionDate": 5, "verifyCode": "c" }"#,
        )
        .unwrap();
        let value = serde_json::to_value(CredentialRecord::from(entry)).unwrap();

        assert_eq!(value["kind"], "specialization");
        assert_eq!(value["verifyCode"], "c");
        assert_eq!(value["completionDate"], 5);
        assert!(value.get("provider").is_none());
    }
}

//! Derived display fields for credential records.
//!
//! Category, level, description and skills are inferred from the record's
//! name with keyword rules; the first matching rule wins.

use super::record::{CredentialKind, CredentialRecord};
use crate::utils::date::{DateTimeUtc, MILLIS_PER_DAY};
use crate::verify::ProviderRegistry;
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A record is recent when completed within this window.
pub const RECENT_WINDOW_MILLIS: i64 = 365 * MILLIS_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Fullstack,
    Data,
    Cloud,
    Mobile,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

/// A record plus everything the education page displays for it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCredential {
    #[serde(flatten)]
    pub record: CredentialRecord,
    /// `"Month YYYY"` in UTC.
    pub formatted_date: String,
    pub completion_year: u16,
    pub is_recent: bool,
    pub category: Category,
    pub level: Level,
    pub display_name: String,
    pub primary_partner: String,
    pub description: &'static str,
    pub skills_estimated: &'static [&'static str],
    /// Explicit provider, or the detected one.
    pub provider_id: String,
    pub provider_name: String,
    pub verification_url: String,
}

/// Compute display fields, relative to `now` (epoch milliseconds).
pub fn enrich(record: CredentialRecord, registry: &ProviderRegistry, now: i64) -> EnrichedCredential {
    let kind = record.kind;
    let completed = DateTimeUtc::from_unix_millis(record.completion_date);
    let category = infer_category(kind, &record.name);

    let provider_id = match record.provider.as_deref() {
        Some(id) if !id.is_empty() => id.to_owned(),
        _ => registry
            .detect_provider(&record.partner_names(), record.verification_url.as_deref())
            .to_owned(),
    };
    let provider_name = registry
        .provider_display_info(Some(&provider_id))
        .display_name
        .clone();

    let custom_url = record.verification_url.as_deref();
    let verification_url = match kind {
        CredentialKind::Certification => {
            registry.resolve_verification_url(&record.verify_code, Some(&provider_id), custom_url)
        }
        CredentialKind::Specialization => registry.resolve_specialization_verification_url(
            &record.verify_code,
            Some(&provider_id),
            custom_url,
        ),
    };

    EnrichedCredential {
        formatted_date: completed.map_or_else(|| "Unknown".to_owned(), DateTimeUtc::month_year),
        completion_year: completed.map_or(0, |dt| dt.year),
        is_recent: is_recent(record.completion_date, now),
        category,
        level: infer_level(kind, &record.name),
        display_name: display_name(&record.name),
        primary_partner: record.primary_partner().to_owned(),
        description: describe(kind, &record.name),
        skills_estimated: estimated_skills(kind, category),
        provider_id,
        provider_name,
        verification_url,
        record,
    }
}

pub fn enrich_all(
    records: Vec<CredentialRecord>,
    registry: &ProviderRegistry,
    now: i64,
) -> Vec<EnrichedCredential> {
    records
        .into_iter()
        .map(|record| enrich(record, registry, now))
        .collect()
}

#[inline]
pub fn is_recent(completion_date: i64, now: i64) -> bool {
    completion_date > now - RECENT_WINDOW_MILLIS
}

type Rules<T> = &'static [(&'static [&'static str], T)];

const CERTIFICATION_CATEGORIES: Rules<Category> = &[
    (&["front", "react", "angular"], Category::Frontend),
    (&["back", "api", "server"], Category::Backend),
    (&["full-stack", "fullstack"], Category::Fullstack),
    (&["data", "algorithm"], Category::Data),
    (&["cloud", "azure", "aws"], Category::Cloud),
];

const SPECIALIZATION_CATEGORIES: Rules<Category> = &[
    (&["front-end", "frontend"], Category::Frontend),
    (&["back-end", "backend"], Category::Backend),
    (&["full-stack", "fullstack"], Category::Fullstack),
    (&["data", "analytics"], Category::Data),
    (&["cloud", "azure", "aws"], Category::Cloud),
    (&["mobile", "ios", "android"], Category::Mobile),
];

const CERTIFICATION_LEVELS: Rules<Level> = &[
    (&["professional", "capstone", "advanced"], Level::Professional),
    (&["intermediate"], Level::Intermediate),
    (&["introduction", "basics", "fundament"], Level::Beginner),
];

const SPECIALIZATION_LEVELS: Rules<Level> = &[
    (&["professional", "developer"], Level::Professional),
    (&["advanced"], Level::Advanced),
    (&["intermediate"], Level::Intermediate),
];

pub fn infer_category(kind: CredentialKind, name: &str) -> Category {
    let rules = match kind {
        CredentialKind::Certification => CERTIFICATION_CATEGORIES,
        CredentialKind::Specialization => SPECIALIZATION_CATEGORIES,
    };
    first_match(name, rules).unwrap_or(Category::Other)
}

pub fn infer_level(kind: CredentialKind, name: &str) -> Level {
    match kind {
        CredentialKind::Certification => {
            first_match(name, CERTIFICATION_LEVELS).unwrap_or(Level::Intermediate)
        }
        CredentialKind::Specialization => {
            first_match(name, SPECIALIZATION_LEVELS).unwrap_or(Level::Beginner)
        }
    }
}

fn first_match<T: Copy>(name: &str, rules: Rules<T>) -> Option<T> {
    let lower = name.to_lowercase();
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(*k)))
        .map(|&(_, value)| value)
}

/// Strip a leading vendor name (`Microsoft - `, `Google `, ...).
pub fn display_name(name: &str) -> String {
    static RE_VENDOR: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)^(Microsoft|Google|Amazon|Meta)\s*-?\s*").unwrap());
    RE_VENDOR.replace(name, "").trim().to_owned()
}

pub fn describe(kind: CredentialKind, name: &str) -> &'static str {
    match (kind, name) {
        (CredentialKind::Certification, "Data Structures and Algorithms") => {
            "Comprehensive course covering fundamental computer science concepts including data structures, algorithms, and computational complexity."
        }
        (CredentialKind::Certification, "Full-Stack Integration") => {
            "Advanced integration techniques for connecting front-end and back-end systems in modern web applications."
        }
        (CredentialKind::Certification, "Introduction to Web Development") => {
            "Foundational course covering HTML, CSS, JavaScript, and web development fundamentals."
        }
        (CredentialKind::Certification, "Web Application Security") => {
            "Security best practices, vulnerability assessment, and protection strategies for web applications."
        }
        (CredentialKind::Certification, _) => {
            "Professional certification course designed to advance technical skills and industry knowledge."
        }
        (CredentialKind::Specialization, "Microsoft Front-End Developer") => {
            "Comprehensive front-end development program covering modern web technologies, responsive design, and user experience best practices."
        }
        (CredentialKind::Specialization, "Microsoft Back-End Developer") => {
            "Server-side development specialization focusing on APIs, databases, security, and scalable backend architecture."
        }
        (CredentialKind::Specialization, "Microsoft Full-Stack Developer") => {
            "Complete web development program combining front-end and back-end technologies for end-to-end application development."
        }
        (CredentialKind::Specialization, _) => {
            "Professional certification program designed to advance technical skills and industry knowledge."
        }
    }
}

pub fn estimated_skills(kind: CredentialKind, category: Category) -> &'static [&'static str] {
    match (category, kind) {
        (Category::Frontend, CredentialKind::Certification) => {
            &["HTML", "CSS", "JavaScript", "React", "UI/UX", "Responsive Design"]
        }
        (Category::Frontend, CredentialKind::Specialization) => {
            &["HTML", "CSS", "JavaScript", "React", "TypeScript", "Responsive Design"]
        }
        (Category::Backend, _) => &[
            "APIs",
            "Databases",
            "Server Architecture",
            "Authentication",
            "Security",
        ],
        (Category::Fullstack, _) => &[
            "Full-Stack Development",
            "System Design",
            "DevOps",
            "Project Management",
        ],
        (Category::Data, _) => &["Data Analysis", "Algorithms", "Statistics", "Database Design"],
        (Category::Cloud, _) => &["Cloud Architecture", "DevOps", "Scalability", "Infrastructure"],
        (Category::Mobile, _) => &["Mobile Development", "UI/UX", "App Store Deployment"],
        (Category::Other, CredentialKind::Certification) => {
            &["Problem Solving", "Technical Communication", "Best Practices"]
        }
        (Category::Other, CredentialKind::Specialization) => {
            &["Problem Solving", "Technical Communication"]
        }
    }
}

//! `[projects]` showcase configuration.

use crate::config::{ConfigDiagnostics, FieldPath, util::is_valid_url};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    pub title: String,
    pub description: String,
    pub featured: Vec<Project>,
    pub cta: CallToAction,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            title: "Featured Projects".into(),
            description: "Solutions that drive business transformation and innovation".into(),
            featured: Vec::new(),
            cta: CallToAction::default(),
        }
    }
}

impl ProjectsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, project) in self.featured.iter().enumerate() {
            if project.id.is_empty() {
                diag.error(
                    FieldPath::indexed("projects.featured", i, "id"),
                    "project id must not be empty",
                );
            } else if self.featured[..i].iter().any(|p| p.id == project.id) {
                diag.error(
                    FieldPath::indexed("projects.featured", i, "id"),
                    format!("duplicate project id `{}`", project.id),
                );
            }

            for link in &project.links {
                if !is_valid_url(&link.url) {
                    diag.error(
                        FieldPath::indexed("projects.featured", i, "links"),
                        format!("invalid url `{}`", link.url),
                    );
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    pub title: String,
    pub description: String,
    pub button_text: String,
}

impl Default for CallToAction {
    fn default() -> Self {
        Self {
            title: "Ready to Build Something Amazing?".into(),
            description: "Let's collaborate on your next project.".into(),
            button_text: "Get In Touch".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub technologies: Vec<Technology>,
    pub features: Vec<ProjectFeature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyInfo>,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Technology {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFeature {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: String,
    pub logo: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Enterprise,
    #[default]
    Personal,
    Freelance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub kind: LinkKind,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    #[default]
    Github,
    Demo,
    CaseStudy,
}

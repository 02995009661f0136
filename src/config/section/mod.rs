//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module         | TOML Section       | Purpose                              |
//! |----------------|--------------------|--------------------------------------|
//! | `personal`     | `[personal]`       | Name, title, availability            |
//! | `contact`      | `[contact]`        | Email, location, social links        |
//! | `nav`          | `[[navigation]]`   | Navigation entries                   |
//! | `hero`         | `[hero]`           | Banner text and buttons              |
//! | `about`        | `[about]`          | Biography, stats, skills             |
//! | `projects`     | `[projects]`       | Featured projects                    |
//! | `education`    | `[education]`      | Credential data sources              |
//! | `theme`        | `[theme]`          | Colors, fonts, animations            |
//! | `seo`          | `[seo]`            | Title, template, keywords            |
//! | `verification` | `[verification]`   | Verification providers               |

mod about;
mod contact;
mod education;
mod hero;
mod nav;
mod personal;
mod projects;
mod seo;
mod theme;
mod verification;

pub use about::{AboutConfig, LocationInfo, SkillCategory, StatItem};
pub use contact::{ContactConfig, SocialLink};
pub use education::{CertificationsSource, EducationConfig, EducationStat, SpecializationsSource};
pub use hero::{ButtonKind, HeroButton, HeroConfig};
pub use nav::{NavItem, default_navigation};
pub use personal::{Availability, PersonalConfig};
pub use projects::{
    CallToAction, CompanyInfo, LinkKind, Project, ProjectFeature, ProjectKind, ProjectLink,
    ProjectsConfig, Technology,
};
pub use seo::SeoConfig;
pub use theme::{ColorScale, FontsConfig, ThemeColors, ThemeConfig};
pub use verification::VerificationConfig;

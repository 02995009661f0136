//! Certification and specialization datasets.
//!
//! # Module Structure
//!
//! ```text
//! credential/
//! ├── record   # Data file shapes, CredentialRecord
//! ├── load     # load_credentials (bare array or `{elements}`), newest first
//! ├── enrich   # Display fields, provider, verification URL
//! └── query    # search, by_category, recent, stats
//! ```

mod enrich;
mod load;
mod query;
mod record;

pub use enrich::{
    Category, EnrichedCredential, Level, RECENT_WINDOW_MILLIS, display_name, enrich, enrich_all,
    infer_category, infer_level,
};
pub use load::{CredentialError, load_credentials, parse_credentials, sort_newest_first};
pub use query::{CredentialStats, by_category, recent, search, stats};
pub use record::{CredentialKind, CredentialRecord, Partner};

//! Folio - portfolio configuration and credential verification links.
//!
//! - [`verify`]: provider registry, verification URL resolution, provider detection
//! - [`config`]: `folio.toml` loading, deep merge onto defaults, validation, titles
//! - [`credential`]: certification/specialization datasets, enrichment, queries

pub mod cli;
pub mod config;
pub mod credential;
pub mod logger;
pub mod utils;
pub mod verify;

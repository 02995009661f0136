//! Shared helpers: dates and pluralization.

pub mod date;
mod plural;

pub use plural::plural_count;

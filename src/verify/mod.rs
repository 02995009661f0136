//! Credential verification links.
//!
//! # Module Structure
//!
//! ```text
//! verify/
//! ├── provider   # VerificationProvider + `{verifyCode}` substitution
//! ├── registry   # Ordered ProviderRegistry (builtin + `[verification]`)
//! ├── resolve    # resolve_verification_url, specialization variant
//! └── detect     # detect_provider (URL, then partner name rules)
//! ```
//!
//! # Example
//!
//! ```
//! use folio::verify::ProviderRegistry;
//!
//! let registry = ProviderRegistry::builtin();
//! let url = registry.resolve_verification_url("ABC123", Some("coursera"), None);
//! assert_eq!(url, "https://coursera.org/verify/ABC123");
//! assert_eq!(registry.detect_provider(&["Microsoft"], None), "microsoft");
//! ```

mod detect;
mod provider;
mod registry;
mod resolve;

pub use provider::{PLACEHOLDER, VerificationProvider, placeholder_count, substitute};
pub use registry::{DEFAULT_PROVIDER, ProviderRegistry, RegistryError, SPECIALIZATION_PROVIDER};

//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Check that a string parses as an absolute URL.
///
/// Uses `url` crate for proper parsing, so `mailto:` and `tel:` links are
/// accepted while relative paths and bare words are not.
///
/// # Examples
/// ```ignore
/// is_valid_url("https://github.com/alice")  -> true
/// is_valid_url("mailto:alice@example.com")  -> true
/// is_valid_url("github.com/alice")          -> false
/// ```
pub fn is_valid_url(url_str: &str) -> bool {
    url::Url::parse(url_str).is_ok()
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/data/       ← cwd
/// /home/user/site/folio.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // First check if config_name is an absolute path
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    // Walk up from start looking for config file
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

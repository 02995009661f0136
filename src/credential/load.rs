//! Credential data file loading.
//!
//! Data files are JSON, either a bare array or an export object wrapping the
//! array in `elements`:
//!
//! ```json
//! { "elements": [ { "courseId": "...", "name": "...", ... } ] }
//! ```

use super::record::{CertificationEntry, CredentialKind, CredentialRecord, SpecializationEntry};
use crate::debug;
use crate::utils::plural_count;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid {kind} data in `{path}`")]
    Parse {
        path: PathBuf,
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a data file, newest first.
pub fn load_credentials(
    path: &Path,
    kind: CredentialKind,
) -> Result<Vec<CredentialRecord>, CredentialError> {
    let content =
        fs::read_to_string(path).map_err(|err| CredentialError::Io(path.to_path_buf(), err))?;

    let records = parse_credentials(&content, kind).map_err(|source| CredentialError::Parse {
        path: path.to_path_buf(),
        kind: kind.noun(),
        source,
    })?;

    debug!("credential"; "loaded {} from {}", plural_count(records.len(), kind.noun()), path.display());
    Ok(records)
}

/// Parse data file content, newest first.
pub fn parse_credentials(
    content: &str,
    kind: CredentialKind,
) -> Result<Vec<CredentialRecord>, serde_json::Error> {
    let items = unwrap_elements(serde_json::from_str(content)?);

    let mut records: Vec<CredentialRecord> = match kind {
        CredentialKind::Certification => serde_json::from_value::<Vec<CertificationEntry>>(items)?
            .into_iter()
            .map(Into::into)
            .collect(),
        CredentialKind::Specialization => {
            serde_json::from_value::<Vec<SpecializationEntry>>(items)?
                .into_iter()
                .map(Into::into)
                .collect()
        }
    };

    sort_newest_first(&mut records);
    Ok(records)
}

/// Stable: records completed at the same instant keep file order.
pub fn sort_newest_first(records: &mut [CredentialRecord]) {
    records.sort_by(|a, b| b.completion_date.cmp(&a.completion_date));
}

fn unwrap_elements(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("elements") {
            Some(elements) => elements,
            None => Value::Object(map),
        },
        other => other,
    }
}

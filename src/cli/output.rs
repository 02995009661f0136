//! JSON output to stdout or a file.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::args::OutputArgs;
use crate::log;

pub fn write_json<T: Serialize + ?Sized>(value: &T, args: &OutputArgs) -> Result<()> {
    let formatted = to_json(value, args.pretty)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("output"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compact_and_pretty() {
        let value = json!({ "id": "coursera", "n": 1 });
        assert_eq!(to_json(&value, false).unwrap(), r#"{"id":"coursera","n":1}"#);
        assert!(to_json(&value, true).unwrap().contains("\n  \"id\""));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let args = OutputArgs {
            pretty: false,
            output: Some(path.clone()),
        };

        write_json(&["a", "b"], &args).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[\"a\",\"b\"]\n");
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = OutputArgs {
            pretty: false,
            output: Some(dir.path().join("missing/out.json")),
        };
        assert!(write_json(&1, &args).is_err());
    }
}

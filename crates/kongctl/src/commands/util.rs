//! Shared helpers for command handlers.

use std::path::Path;

use serde_json::{Map, Value};

use crate::cli::UpdateArgs;
use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read and parse a JSON file for `--from-file` flags.
pub fn read_json_file(path: &Path) -> Result<Value, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("invalid JSON: {e}"),
    })
}

/// Read a JSON file that must hold an object.
pub fn read_json_object(path: &Path) -> Result<Map<String, Value>, CliError> {
    match read_json_file(path)? {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::Validation {
            field: "from-file".into(),
            reason: format!("{} must contain a JSON object", path.display()),
        }),
    }
}

/// Parse `KEY=VALUE` pairs into a JSON object.
///
/// Values that parse as JSON (`8080`, `true`, `["a","b"]`, `null`) keep
/// their type; anything else is a string.
pub fn parse_assignments(pairs: &[String], field: &str) -> Result<Map<String, Value>, CliError> {
    let mut map = Map::new();
    for pair in pairs {
        let Some((key, raw)) = pair.split_once('=') else {
            return Err(CliError::Validation {
                field: field.into(),
                reason: format!("expected KEY=VALUE, got '{pair}'"),
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::Validation {
                field: field.into(),
                reason: format!("empty key in '{pair}'"),
            });
        }
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()));
        map.insert(key.to_owned(), value);
    }
    Ok(map)
}

/// Collect the changes of an `update` command from `--set` or `--from-file`.
pub fn update_changes(args: &UpdateArgs) -> Result<Map<String, Value>, CliError> {
    let changes = match args.from_file {
        Some(ref path) => read_json_object(path)?,
        None => parse_assignments(&args.set, "set")?,
    };
    if changes.is_empty() {
        return Err(CliError::Validation {
            field: "update".into(),
            reason: "nothing to change; pass --set KEY=VALUE or --from-file".into(),
        });
    }
    Ok(changes)
}

/// Treat an empty repeatable flag as "not given".
pub fn non_empty(items: Vec<String>) -> Option<Vec<String>> {
    if items.is_empty() { None } else { Some(items) }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn assignments_keep_json_types() {
        let map = parse_assignments(
            &[
                "port=8080".into(),
                "host=example.com".into(),
                "tags=[\"a\",\"b\"]".into(),
                "path=null".into(),
                "url=http://x/y?a=b".into(),
            ],
            "set",
        )
        .unwrap();
        assert_eq!(map["port"], json!(8080));
        assert_eq!(map["host"], json!("example.com"));
        assert_eq!(map["tags"], json!(["a", "b"]));
        assert_eq!(map["path"], Value::Null);
        assert_eq!(map["url"], json!("http://x/y?a=b"));
    }

    #[test]
    fn assignment_without_equals_is_rejected() {
        assert!(matches!(
            parse_assignments(&["port".into()], "set"),
            Err(CliError::Validation { .. })
        ));
    }

    #[test]
    fn update_requires_some_change() {
        let args = UpdateArgs {
            id: "svc".into(),
            set: Vec::new(),
            from_file: None,
        };
        assert!(update_changes(&args).is_err());
    }

    #[test]
    fn from_file_must_be_an_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changes.json");
        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(read_json_object(&path).is_err());

        std::fs::write(&path, r#"{"retries": 3}"#).unwrap();
        assert_eq!(read_json_object(&path).unwrap()["retries"], json!(3));
    }
}

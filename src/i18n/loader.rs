//! Translation group loading and key dotting
//!
//! A group file holds a nested JSON object. Dotting turns it into flat
//! `(path, value)` pairs, e.g. `{"auth": {"failed": "..."}}` becomes
//! `auth.failed`.

use std::path::{Path, PathBuf};
use serde_json::{Map, Value};
use tokio::fs;
use tracing::debug;
use crate::models::FlattenedTranslation;
use crate::utils::errors::{ImportError, Result};
use super::scanner::GROUP_EXTENSION;

/// Path of the file backing `group` for `locale`
pub fn group_file_path(lang_path: &Path, locale: &str, group: &str) -> PathBuf {
    let mut path = lang_path.join(locale);
    let mut segments = group.split('/').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_some() {
            path.push(segment);
        } else {
            // the group name may itself contain dots
            path.push(format!("{}.{}", segment, GROUP_EXTENSION));
        }
    }
    path
}

/// Load the translation tree of one group for one locale
pub async fn load_group(lang_path: &Path, locale: &str, group: &str) -> Result<Map<String, Value>> {
    let file_path = group_file_path(lang_path, locale, group);
    let content = fs::read_to_string(&file_path).await?;

    let translations: Value = serde_json::from_str(&content).map_err(|e| {
        ImportError::InvalidTranslationFile {
            path: file_path.clone(),
            reason: e.to_string(),
        }
    })?;

    match translations {
        Value::Object(map) => {
            debug!(group = group, locale = locale, keys = map.len(), "Loaded translation group");
            Ok(map)
        }
        other => Err(ImportError::InvalidTranslationFile {
            path: file_path,
            reason: format!("expected a JSON object at the root, found {}", json_type(&other)),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Flatten a nested translation tree into dotted key/value pairs
///
/// Array elements use their index as the path segment. Numbers and booleans
/// keep their JSON text, `null` becomes an empty string, and empty
/// objects or arrays produce nothing.
pub fn dot(translations: &Map<String, Value>, separator: &str) -> Vec<(String, String)> {
    let mut result = Vec::new();
    for (key, value) in translations {
        dot_value(value, separator, key.clone(), &mut result);
    }
    result
}

fn dot_value(value: &Value, separator: &str, prefix: String, result: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                dot_value(nested, separator, format!("{}{}{}", prefix, separator, key), result);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                dot_value(nested, separator, format!("{}{}{}", prefix, separator, index), result);
            }
        }
        Value::String(s) => result.push((prefix, s.clone())),
        Value::Null => result.push((prefix, String::new())),
        other => result.push((prefix, other.to_string())),
    }
}

/// Dot a group tree into `FlattenedTranslation` entries for `locale`
pub fn flatten_group(
    group: &str,
    locale: &str,
    translations: &Map<String, Value>,
    separator: &str,
) -> Vec<FlattenedTranslation> {
    dot(translations, separator)
        .into_iter()
        .map(|(key, value)| FlattenedTranslation {
            group: group.to_string(),
            key,
            locale: locale.to_string(),
            value,
        })
        .collect()
}

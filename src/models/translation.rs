//! Translation models

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Locale code to translation, kept in locale order.
///
/// Stored as a single JSON object column. A locale appears at most once.
/// Values written by this tool are strings; anything else already stored in
/// the column (`null`, numbers, nested objects) is kept as is and written
/// back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleMap(BTreeMap<String, Value>);

impl LocaleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map holding a single locale entry
    pub fn single(locale: impl Into<String>, value: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.set(locale, value);
        map
    }

    /// String translation for `locale`; `None` for absent or non-string entries
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).and_then(Value::as_str)
    }

    pub fn get_value(&self, locale: &str) -> Option<&Value> {
        self.0.get(locale)
    }

    /// Whether the locale key is present, whatever its value
    pub fn contains(&self, locale: &str) -> bool {
        self.0.contains_key(locale)
    }

    /// Insert or replace a locale entry, returning the previous value
    pub fn set(&mut self, locale: impl Into<String>, value: impl Into<String>) -> Option<Value> {
        self.0.insert(locale.into(), Value::String(value.into()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(locale, value)| (locale.as_str(), value))
    }

    /// Encode as the JSON object written to the translations column
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode the translations column
    ///
    /// `NULL`, blank text, `null` and `[]` (an emptied PHP array) decode to an
    /// empty map. A JSON list decodes with its indexes as locale keys. Only a
    /// scalar at the root or malformed JSON is an error.
    pub fn from_json(raw: Option<&str>) -> serde_json::Result<Self> {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Ok(Self::new()),
            Some(raw) => raw,
        };

        match serde_json::from_str::<Value>(raw)? {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            Value::Array(items) => Ok(Self(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, value)| (index.to_string(), value))
                    .collect(),
            )),
            other => Err(<serde_json::Error as serde::de::Error>::custom(format!(
                "expected a JSON object of translations, found {}",
                other
            ))),
        }
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for LocaleMap {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(l, v)| (l.into(), Value::String(v.into())))
                .collect(),
        )
    }
}

/// A persisted translation row, unique by `(group, key)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRow {
    pub group: String,
    pub key: String,
    pub translations: LocaleMap,
}

impl TranslationRow {
    pub fn new(group: impl Into<String>, key: impl Into<String>, translations: LocaleMap) -> Self {
        Self {
            group: group.into(),
            key: key.into(),
            translations,
        }
    }
}

/// One dotted leaf of a group's translation tree for a given locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedTranslation {
    pub group: String,
    pub key: String,
    pub locale: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locale_map_json_encoding() {
        let map: LocaleMap = [("fr", "Salut"), ("en", "Hi")].into_iter().collect();
        assert_eq!(map.to_json().unwrap(), r#"{"en":"Hi","fr":"Salut"}"#);
    }

    #[test]
    fn test_locale_map_decodes_null_as_empty() {
        assert!(LocaleMap::from_json(None).unwrap().is_empty());
        assert!(LocaleMap::from_json(Some("null")).unwrap().is_empty());
        assert!(LocaleMap::from_json(Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn test_locale_map_decodes_empty_list_as_empty() {
        assert!(LocaleMap::from_json(Some("[]")).unwrap().is_empty());

        let listed = LocaleMap::from_json(Some(r#"["Hi"]"#)).unwrap();
        assert_eq!(listed.get("0"), Some("Hi"));
        assert!(!listed.contains("en"));
    }

    #[test]
    fn test_locale_map_keeps_non_string_values() {
        let mut map = LocaleMap::from_json(Some(r#"{"en": null, "fr": "Salut", "nl": 1}"#)).unwrap();

        assert!(map.contains("en"));
        assert_eq!(map.get("en"), None);
        assert_eq!(map.get_value("nl"), Some(&json!(1)));

        map.set("fr", "Bonjour");
        assert_eq!(map.to_json().unwrap(), r#"{"en":null,"fr":"Bonjour","nl":1}"#);
    }

    #[test]
    fn test_locale_map_rejects_scalars_and_malformed_json() {
        assert!(LocaleMap::from_json(Some(r#""en""#)).is_err());
        assert!(LocaleMap::from_json(Some("42")).is_err());
        assert!(LocaleMap::from_json(Some("{ not json")).is_err());
    }

    #[test]
    fn test_set_replaces_existing_locale() {
        let mut map = LocaleMap::single("en", "Hi");
        assert_eq!(map.set("en", "Hello"), Some(json!("Hi")));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("en"), Some("Hello"));
    }
}

//! Selector catalog
//!
//! Maps trigger keys to the ordered candidate lists offered once the trigger
//! is armed. The catalog is built once at startup and only read afterwards.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Trigger key for value-type selectors (`$string`, `$frame`, ...)
pub const VALUE_TRIGGER_KEY: &str = "$";

/// Logical key armed by a space press after non-empty input
pub const BOOLEAN_OPERATORS_KEY: &str = "booleanOperators";

/// Value types offered after `$`
const VALUE_TYPES: &[&str] = &[
    "string",
    "number",
    "boolean",
    "datetime",
    "array",
    "object",
    "event",
    "exception",
    "stacktrace",
    "frame",
    "request",
    "user",
    "logentry",
    "thread",
    "breadcrumb",
    "span",
    "sdkv",
];

/// Operators offered between selectors
const BOOLEAN_OPERATORS: &[&str] = &["||", "&&", "!"];

static BUILTIN: LazyLock<Arc<SelectorCatalog>> =
    LazyLock::new(|| Arc::new(SelectorCatalog::builtin()));

/// Immutable mapping from trigger key to candidate list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorCatalog {
    /// Entries in insertion order
    entries: Vec<(String, Vec<String>)>,
}

impl SelectorCatalog {
    /// Build the catalog used by the data privacy rule selector field
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                (
                    VALUE_TRIGGER_KEY.to_string(),
                    VALUE_TYPES.iter().map(|s| s.to_string()).collect(),
                ),
                (
                    BOOLEAN_OPERATORS_KEY.to_string(),
                    BOOLEAN_OPERATORS.iter().map(|s| s.to_string()).collect(),
                ),
            ],
        }
    }

    /// Process-wide shared handle to the built-in catalog
    pub fn shared_builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Build the built-in catalog extended with extra selectors
    ///
    /// Extra entries whose key already exists replace the built-in candidates.
    /// The boolean operator entry cannot be replaced by an empty list.
    ///
    /// # Arguments
    /// * `extra` - Additional trigger keys and their candidates
    ///
    /// # Returns
    /// * `Result<Self>` - Extended catalog, or an error for invalid entries
    pub fn with_extra(extra: &BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut catalog = Self::builtin();

        for (key, values) in extra {
            if key.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "catalog.selectors".to_string(),
                    value: String::new(),
                }
                .into());
            }
            if key == BOOLEAN_OPERATORS_KEY && values.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("catalog.selectors.{key}"),
                    value: "[]".to_string(),
                }
                .into());
            }

            debug!("Catalog entry '{}' with {} candidates", key, values.len());

            match catalog.entries.iter_mut().find(|(k, _)| k == key) {
                Some((_, existing)) => *existing = values.clone(),
                None => catalog.entries.push((key.clone(), values.clone())),
            }
        }

        Ok(catalog)
    }

    /// Look up the candidates for a trigger key
    ///
    /// Matching is exact and case-sensitive.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Check whether a key arms a selector
    pub fn is_trigger(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Check whether `value` is an exact candidate of `key`
    pub fn contains_value(&self, key: &str, value: &str) -> bool {
        self.get(key)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// Iterate over all entries in catalog order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    /// Trigger keys that are typed characters (everything but the logical operator key)
    pub fn typed_triggers(&self) -> impl Iterator<Item = &str> {
        self.entries()
            .map(|(k, _)| k)
            .filter(|k| *k != BOOLEAN_OPERATORS_KEY)
    }
}

impl Default for SelectorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_value_types() {
        let catalog = SelectorCatalog::builtin();
        let values = catalog.get("$").expect("value trigger");
        assert_eq!(values.len(), 17);
        assert_eq!(values[0], "string");
        assert_eq!(values[16], "sdkv");
    }

    #[test]
    fn test_builtin_has_boolean_operators() {
        let catalog = SelectorCatalog::builtin();
        assert_eq!(
            catalog.get(BOOLEAN_OPERATORS_KEY),
            Some(&["||".to_string(), "&&".to_string(), "!".to_string()][..])
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = SelectorCatalog::builtin();
        assert!(catalog.is_trigger("$"));
        assert!(!catalog.is_trigger("booleanoperators"));
        assert!(catalog.get("#").is_none());
    }

    #[test]
    fn test_contains_value() {
        let catalog = SelectorCatalog::builtin();
        assert!(catalog.contains_value("$", "frame"));
        assert!(!catalog.contains_value("$", "Frame"));
        assert!(!catalog.contains_value("#", "frame"));
    }

    #[test]
    fn test_with_extra_adds_and_replaces() {
        let mut extra = BTreeMap::new();
        extra.insert("@".to_string(), vec!["password".to_string()]);
        extra.insert("$".to_string(), vec!["string".to_string()]);

        let catalog = SelectorCatalog::with_extra(&extra).unwrap();
        assert_eq!(catalog.get("@"), Some(&["password".to_string()][..]));
        assert_eq!(catalog.get("$"), Some(&["string".to_string()][..]));
        assert_eq!(catalog.typed_triggers().collect::<Vec<_>>(), vec!["$", "@"]);
    }

    #[test]
    fn test_with_extra_rejects_empty_key() {
        let mut extra = BTreeMap::new();
        extra.insert(String::new(), vec!["x".to_string()]);
        assert!(SelectorCatalog::with_extra(&extra).is_err());
    }

    #[test]
    fn test_with_extra_rejects_empty_boolean_operators() {
        let mut extra = BTreeMap::new();
        extra.insert(BOOLEAN_OPERATORS_KEY.to_string(), Vec::new());
        assert!(SelectorCatalog::with_extra(&extra).is_err());
    }

    #[test]
    fn test_shared_builtin_is_same_instance() {
        let a = SelectorCatalog::shared_builtin();
        let b = SelectorCatalog::shared_builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }
}

//! Catalog entries and search aliases.
//!
//! A catalog is a static reference vocabulary for one coded sample field.
//! Entries are plain field/value maps; which field acts as the identifier is
//! a property of the catalog, not of the entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One canonical entry of a catalog (e.g. `Kode`, `Text1`, `P-Code3`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogEntry {
    fields: BTreeMap<String, String>,
}

impl CatalogEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Field value, or an empty string when the field is absent.
    pub fn value_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for CatalogEntry
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Alternate spellings that should resolve to a canonical catalog text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchAlias {
    /// Catalog name (e.g. "adv16").
    pub catalog: String,
    /// Canonical text the aliases resolve to.
    pub token: String,
    pub alias: Vec<String>,
}

impl SearchAlias {
    /// Flattened `(alias, token)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.alias
            .iter()
            .map(move |alias| (alias.as_str(), self.token.as_str()))
    }
}

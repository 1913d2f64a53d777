//! A single reference catalog.
//!
//! Entries keep their load order; that order is the tie-break for fuzzy
//! search and the "first match" for field lookups.

use std::collections::HashMap;

use adv_model::CatalogEntry;

use crate::error::{CatalogError, Result};

#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    id_field: String,
    entries: Vec<CatalogEntry>,
    /// Id value -> position in `entries`.
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Creates a catalog keyed by `id_field`.
    ///
    /// # Errors
    ///
    /// Fails when an entry lacks the id field or two entries share an id.
    pub fn new(
        name: impl Into<String>,
        id_field: impl Into<String>,
        entries: Vec<CatalogEntry>,
    ) -> Result<Self> {
        let name = name.into();
        let id_field = id_field.into();
        let mut by_id = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            let id = entry.value_or_empty(&id_field);
            if id.is_empty() {
                return Err(CatalogError::MissingId {
                    catalog: name,
                    id_field,
                    row: position + 1,
                });
            }
            if by_id.insert(id.to_string(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    catalog: name,
                    id: id.to_string(),
                });
            }
        }

        Ok(Self {
            name,
            id_field,
            entries,
            by_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|position| &self.entries[*position])
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Entries whose `field` equals `value` exactly, in catalog order.
    pub fn entries_with_field_value(&self, field: &str, value: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.get(field) == Some(value))
            .collect()
    }

    pub fn contains_field_value(&self, field: &str, value: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.get(field) == Some(value))
    }

    /// True when at least one entry defines `field`.
    pub fn has_field(&self, field: &str) -> bool {
        field == self.id_field || self.entries.iter().any(|entry| entry.get(field).is_some())
    }
}

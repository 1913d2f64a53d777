//! In-memory catalog store.

use std::collections::BTreeMap;

use adv_model::{CatalogEntry, SearchAlias};
use adv_search::{FuzzyIndex, FuzzyIndexOptions};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::port::CatalogPort;

/// Catalogs keyed by lowercase name, plus the search alias table.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalogs: BTreeMap<String, Catalog>,
    aliases: Vec<SearchAlias>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a catalog, replacing one with the same name.
    pub fn insert(&mut self, catalog: Catalog) {
        self.catalogs.insert(catalog.name().to_lowercase(), catalog);
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.insert(catalog);
        self
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: Vec<SearchAlias>) -> Self {
        self.aliases.extend(aliases);
        self
    }

    pub fn catalog(&self, name: &str) -> Option<&Catalog> {
        self.catalogs.get(&name.to_lowercase())
    }

    /// Catalogs in name order.
    pub fn catalogs(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.values()
    }

    pub fn aliases(&self) -> &[SearchAlias] {
        &self.aliases
    }

    fn require(&self, name: &str) -> Result<&Catalog> {
        self.catalog(name)
            .ok_or_else(|| CatalogError::unknown_catalog(name))
    }
}

impl CatalogPort for CatalogStore {
    fn has_catalog(&self, catalog: &str) -> bool {
        self.catalog(catalog).is_some()
    }

    fn has_field(&self, catalog: &str, field: &str) -> bool {
        self.catalog(catalog)
            .is_some_and(|catalog| catalog.has_field(field))
    }

    fn get_entry_by_id(&self, catalog: &str, id: &str) -> Result<&CatalogEntry> {
        let found = self.require(catalog)?;
        found.get(id).ok_or_else(|| CatalogError::EntryNotFound {
            catalog: found.name().to_string(),
            id: id.to_string(),
        })
    }

    fn contains_id(&self, catalog: &str, id: &str) -> bool {
        self.catalog(catalog)
            .is_some_and(|catalog| catalog.contains_id(id))
    }

    fn entries_with_field_value(
        &self,
        catalog: &str,
        field: &str,
        value: &str,
    ) -> Vec<&CatalogEntry> {
        self.catalog(catalog)
            .map(|catalog| catalog.entries_with_field_value(field, value))
            .unwrap_or_default()
    }

    fn contains_field_value(&self, catalog: &str, field: &str, value: &str) -> bool {
        self.catalog(catalog)
            .is_some_and(|catalog| catalog.contains_field_value(field, value))
    }

    fn build_fuzzy_index(&self, catalog: &str, options: &FuzzyIndexOptions) -> Result<FuzzyIndex> {
        let found = self.require(catalog)?;
        for field in options.referenced_fields() {
            if !found.has_field(field) {
                return Err(CatalogError::UnknownField {
                    catalog: found.name().to_string(),
                    field: field.to_string(),
                });
            }
        }
        debug!(catalog = %found.name(), entries = found.len(), "building fuzzy index");
        Ok(FuzzyIndex::build(found.entries(), options.clone())?)
    }

    fn search_aliases(&self, catalog: &str) -> Vec<SearchAlias> {
        self.aliases
            .iter()
            .filter(|alias| alias.catalog.eq_ignore_ascii_case(catalog))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adv_search::WeightedField;

    fn store() -> CatalogStore {
        let pathogens = Catalog::new(
            "ADV16",
            "Kode",
            vec![
                CatalogEntry::new()
                    .with("Kode", "0100001")
                    .with("Text1", "Escherichia coli")
                    .with("P-Code3", "ECO"),
                CatalogEntry::new()
                    .with("Kode", "0200001")
                    .with("Text1", "Salmonella Enteritidis"),
            ],
        )
        .unwrap();
        CatalogStore::new()
            .with_catalog(pathogens)
            .with_aliases(vec![
                SearchAlias {
                    catalog: "adv16".to_string(),
                    token: "Escherichia coli".to_string(),
                    alias: vec!["EHEC".to_string()],
                },
                SearchAlias {
                    catalog: "adv9".to_string(),
                    token: "Hamburg".to_string(),
                    alias: vec!["HH".to_string()],
                },
            ])
    }

    #[test]
    fn catalog_names_are_case_insensitive() {
        let store = store();
        assert!(store.has_catalog("adv16"));
        assert!(store.contains_id("Adv16", "0100001"));
        assert!(!store.has_catalog("adv3"));
    }

    #[test]
    fn get_entry_by_id_reports_missing_ids() {
        let store = store();
        assert_eq!(
            store
                .get_entry_by_id("adv16", "0100001")
                .unwrap()
                .get("Text1"),
            Some("Escherichia coli")
        );
        assert!(matches!(
            store.get_entry_by_id("adv16", "9999999"),
            Err(CatalogError::EntryNotFound { .. })
        ));
        assert!(matches!(
            store.get_entry_by_id("adv3", "1"),
            Err(CatalogError::UnknownCatalog { .. })
        ));
    }

    #[test]
    fn unknown_catalog_has_no_entries() {
        let store = store();
        assert!(store.entries_with_field_value("adv3", "Kode", "M1").is_empty());
        assert!(!store.contains_field_value("adv3", "Kode", "M1"));
        assert!(!store.contains_id("adv3", "M1"));
    }

    #[test]
    fn aliases_are_filtered_by_catalog() {
        let store = store();
        let aliases = store.search_aliases("adv16");
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases[0].token, "Escherichia coli");
        assert!(store.search_aliases("adv12").is_empty());
    }

    #[test]
    fn fuzzy_index_requires_known_fields() {
        let store = store();
        let index = store
            .build_fuzzy_index("adv16", &FuzzyIndexOptions::default())
            .unwrap();
        assert_eq!(index.len(), 2);

        let options = FuzzyIndexOptions::new("Text1", vec![WeightedField::new("Text2", 1.0)]);
        assert!(matches!(
            store.build_fuzzy_index("adv16", &options),
            Err(CatalogError::UnknownField { field, .. }) if field == "Text2"
        ));
    }
}

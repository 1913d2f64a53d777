//! Read access to reference catalogs.
//!
//! The correction engine depends only on this trait. [`CatalogStore`] is the
//! in-memory implementation; tests may provide their own.
//!
//! [`CatalogStore`]: crate::CatalogStore

use adv_model::{CatalogEntry, SearchAlias};
use adv_search::{FuzzyIndex, FuzzyIndexOptions};

use crate::error::Result;

/// Read-only access to catalogs by name.
///
/// Implementations must be shareable across threads; catalog data never
/// changes after construction.
pub trait CatalogPort: Send + Sync {
    fn has_catalog(&self, catalog: &str) -> bool;

    /// True when at least one entry of `catalog` defines `field`.
    fn has_field(&self, catalog: &str, field: &str) -> bool;

    /// Returns the entry with the given id.
    ///
    /// # Errors
    ///
    /// Fails with [`CatalogError::EntryNotFound`] when the id is absent.
    /// Callers are expected to check [`contains_id`](Self::contains_id) first.
    ///
    /// [`CatalogError::EntryNotFound`]: crate::CatalogError::EntryNotFound
    fn get_entry_by_id(&self, catalog: &str, id: &str) -> Result<&CatalogEntry>;

    fn contains_id(&self, catalog: &str, id: &str) -> bool;

    /// Entries whose `field` equals `value`, in catalog order. Unknown
    /// catalogs yield no entries.
    fn entries_with_field_value(&self, catalog: &str, field: &str, value: &str)
    -> Vec<&CatalogEntry>;

    fn contains_field_value(&self, catalog: &str, field: &str, value: &str) -> bool {
        !self.entries_with_field_value(catalog, field, value).is_empty()
    }

    /// Builds a fuzzy index over the entries of `catalog`.
    ///
    /// # Errors
    ///
    /// Fails for unknown catalogs, fields the catalog does not define, or
    /// invalid options.
    fn build_fuzzy_index(&self, catalog: &str, options: &FuzzyIndexOptions) -> Result<FuzzyIndex>;

    /// Search aliases configured for `catalog`.
    fn search_aliases(&self, catalog: &str) -> Vec<SearchAlias>;
}

//! Pathogen (ADV-16) correction.
//!
//! Stages, first hit wins:
//!
//! 1. Numeric codes: digits-only input, six-digit codes padded with a zero,
//!    offers the entry's `Text1` (code 87).
//! 2. Genus: `"Genus " + value` is a catalog text (code 88).
//! 3. Fuzzy search over `Text1`/`P-Code3`, with a matching alias pinned in
//!    front of the ranked hits (code 0).

use std::sync::Arc;

use adv_catalog::CatalogPort;
use adv_model::{CorrectionCode, CorrectionSuggestion, SampleData, SampleField};
use adv_search::FuzzyIndex;
use tracing::debug;

use super::{
    PATHOGEN_CATALOG, TEXT_FIELD, cached_suggest, offer, probe_id_field, require_catalog,
};
use crate::cache::SuggestionCache;
use crate::config::CorrectionConfig;
use crate::error::{CorrectionError, Result};
use crate::patterns::{is_all_digits, pad_with_zero, space_after_dots};
use crate::strategy::{CorrectionStrategy, target_value};

const GENUS_PREFIX: &str = "Genus ";

pub struct PathogenStrategy {
    catalogs: Arc<dyn CatalogPort>,
    index: FuzzyIndex,
    /// Flattened `(alias, canonical text)` pairs in configuration order.
    aliases: Vec<(String, String)>,
    fuzzy_window: usize,
    alias_window: usize,
    cache: SuggestionCache,
}

impl PathogenStrategy {
    /// Builds the fuzzy index and alias table for the pathogen catalog.
    ///
    /// # Errors
    ///
    /// Fails with [`CorrectionError::Configuration`] when the catalog is
    /// missing or the index options reference fields it does not define.
    pub fn new(catalogs: Arc<dyn CatalogPort>, config: &CorrectionConfig) -> Result<Self> {
        require_catalog(catalogs.as_ref(), PATHOGEN_CATALOG)?;
        let index = catalogs
            .build_fuzzy_index(PATHOGEN_CATALOG, &config.pathogen_index)
            .map_err(|e| {
                CorrectionError::configuration(format!("pathogen fuzzy index: {e}"))
            })?;

        let aliases: Vec<(String, String)> = catalogs
            .search_aliases(PATHOGEN_CATALOG)
            .iter()
            .flat_map(|alias| {
                alias
                    .pairs()
                    .map(|(text, token)| (text.to_string(), token.to_string()))
            })
            .collect();

        debug!(
            field = %SampleField::PathogenAdv,
            indexed = index.len(),
            aliases = aliases.len(),
            "initialising correction strategy"
        );

        Ok(Self {
            catalogs,
            index,
            aliases,
            fuzzy_window: config.fuzzy_window,
            alias_window: config.alias_window,
            cache: SuggestionCache::new(),
        })
    }

    fn resolve(&self, raw: &str, trimmed: &str) -> Result<Option<CorrectionSuggestion>> {
        let catalogs = self.catalogs.as_ref();

        if is_all_digits(trimmed) {
            let candidate = pad_with_zero(trimmed, 6).unwrap_or_else(|| trimmed.to_string());
            if let Some(text) = probe_id_field(catalogs, PATHOGEN_CATALOG, &candidate, TEXT_FIELD)?
            {
                return Ok(Some(offer(
                    self.field(),
                    raw,
                    text,
                    CorrectionCode::PATHOGEN_CODE,
                )));
            }
        }

        let genus = format!("{GENUS_PREFIX}{trimmed}");
        if catalogs.contains_field_value(PATHOGEN_CATALOG, TEXT_FIELD, &genus) {
            return Ok(Some(offer(
                self.field(),
                raw,
                genus,
                CorrectionCode::PATHOGEN_GENUS,
            )));
        }

        let pinned = self.alias_for(trimmed);
        let hits = self.index.search(&space_after_dots(trimmed))?;
        let mut offers: Vec<String> = hits.into_iter().map(|hit| hit.item).collect();
        let window = match pinned {
            Some(token) => {
                offers.retain(|item| item != token);
                offers.insert(0, token.to_string());
                self.alias_window
            }
            None => self.fuzzy_window,
        };
        offers.truncate(window);

        if offers.is_empty() {
            return Ok(None);
        }
        Ok(Some(CorrectionSuggestion::new(
            self.field(),
            raw,
            offers,
            CorrectionCode::UNVERIFIED,
        )))
    }

    /// Canonical text of the last alias equal to `value`.
    fn alias_for(&self, value: &str) -> Option<&str> {
        self.aliases
            .iter()
            .rev()
            .find(|(alias, _)| alias == value)
            .map(|(_, token)| token.as_str())
    }
}

impl CorrectionStrategy for PathogenStrategy {
    fn field(&self) -> SampleField {
        SampleField::PathogenAdv
    }

    fn description(&self) -> &'static str {
        "Pathogen: numeric codes, genus names, aliases and fuzzy search"
    }

    fn suggest(&self, sample: &SampleData) -> Result<Option<CorrectionSuggestion>> {
        let raw = target_value(sample, self.field())?;
        cached_suggest(&self.cache, self.field(), raw, |trimmed| {
            self.resolve(raw, trimmed)
        })
    }
}

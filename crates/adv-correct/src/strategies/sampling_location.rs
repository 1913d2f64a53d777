use std::sync::Arc;

use adv_catalog::CatalogPort;
use adv_model::{CorrectionCode, CorrectionSuggestion, SampleData, SampleField};
use tracing::debug;

use super::{SAMPLING_LOCATION_CATALOG, cached_suggest, offer, probe_id, require_catalog};
use crate::cache::SuggestionCache;
use crate::error::Result;
use crate::patterns::{is_all_digits, pad_with_zero, replace_suffix};
use crate::strategy::{CorrectionStrategy, target_value};

/// Longest code that may have lost its leading zero.
const MAX_PADDED_DIGITS: usize = 7;

/// Sampling location (ADV-9): drop an `xxx` placeholder, then restore a lost
/// leading zero.
pub struct SamplingLocationStrategy {
    catalogs: Arc<dyn CatalogPort>,
    cache: SuggestionCache,
}

impl SamplingLocationStrategy {
    pub fn new(catalogs: Arc<dyn CatalogPort>) -> Result<Self> {
        require_catalog(catalogs.as_ref(), SAMPLING_LOCATION_CATALOG)?;
        debug!(field = %SampleField::SamplingLocationAdv, "initialising correction strategy");
        Ok(Self {
            catalogs,
            cache: SuggestionCache::new(),
        })
    }

    fn resolve(&self, raw: &str, trimmed: &str) -> Result<Option<CorrectionSuggestion>> {
        let catalogs = self.catalogs.as_ref();
        let stripped = replace_suffix(trimmed, "xxx", "");

        if let Some(candidate) = &stripped
            && let Some(code) = probe_id(catalogs, SAMPLING_LOCATION_CATALOG, candidate)?
        {
            return Ok(Some(self.suggestion(raw, code)));
        }

        // Bare values keep the strict 7-digit rule; stripped values may be
        // shorter.
        let candidate = match stripped.as_deref() {
            Some(stem) if stem.len() <= MAX_PADDED_DIGITS && is_all_digits(stem) => {
                Some(format!("0{stem}"))
            }
            Some(_) => None,
            None => pad_with_zero(trimmed, MAX_PADDED_DIGITS),
        };
        if let Some(candidate) = candidate
            && let Some(code) = probe_id(catalogs, SAMPLING_LOCATION_CATALOG, &candidate)?
        {
            return Ok(Some(self.suggestion(raw, code)));
        }
        Ok(None)
    }

    fn suggestion(&self, raw: &str, code: String) -> CorrectionSuggestion {
        offer(
            self.field(),
            raw,
            code,
            CorrectionCode::SAMPLING_LOCATION,
        )
    }
}

impl CorrectionStrategy for SamplingLocationStrategy {
    fn field(&self) -> SampleField {
        SampleField::SamplingLocationAdv
    }

    fn description(&self) -> &'static str {
        "Sampling location: strip xxx placeholder, restore leading zero"
    }

    fn suggest(&self, sample: &SampleData) -> Result<Option<CorrectionSuggestion>> {
        let raw = target_value(sample, self.field())?;
        cached_suggest(&self.cache, self.field(), raw, |trimmed| {
            self.resolve(raw, trimmed)
        })
    }
}

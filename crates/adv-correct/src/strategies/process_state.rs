use std::sync::Arc;

use adv_catalog::CatalogPort;
use adv_model::{CorrectionCode, CorrectionSuggestion, SampleData, SampleField};
use tracing::debug;

use super::{
    CODE_FIELD, PROCESS_STATE_CATALOG, TEXT_FIELD, cached_suggest, offer, probe_id,
    require_catalog,
};
use crate::cache::SuggestionCache;
use crate::error::Result;
use crate::patterns::pad_with_zero;
use crate::strategy::{CorrectionStrategy, target_value};

/// Process state (ADV-12): padded two-digit codes, then plain-text names.
pub struct ProcessStateStrategy {
    catalogs: Arc<dyn CatalogPort>,
    cache: SuggestionCache,
}

impl ProcessStateStrategy {
    pub fn new(catalogs: Arc<dyn CatalogPort>) -> Result<Self> {
        require_catalog(catalogs.as_ref(), PROCESS_STATE_CATALOG)?;
        debug!(field = %SampleField::ProcessStateAdv, "initialising correction strategy");
        Ok(Self {
            catalogs,
            cache: SuggestionCache::new(),
        })
    }

    fn resolve(&self, raw: &str, trimmed: &str) -> Result<Option<CorrectionSuggestion>> {
        let catalogs = self.catalogs.as_ref();

        if let Some(candidate) = pad_with_zero(trimmed, 2)
            && let Some(code) = probe_id(catalogs, PROCESS_STATE_CATALOG, &candidate)?
        {
            return Ok(Some(offer(
                self.field(),
                raw,
                code,
                CorrectionCode::PROCESS_STATE,
            )));
        }

        let by_text = catalogs.entries_with_field_value(PROCESS_STATE_CATALOG, TEXT_FIELD, trimmed);
        Ok(by_text
            .first()
            .and_then(|entry| entry.get(CODE_FIELD))
            .map(|code| {
                offer(
                    self.field(),
                    raw,
                    code.to_string(),
                    CorrectionCode::PROCESS_STATE,
                )
            }))
    }
}

impl CorrectionStrategy for ProcessStateStrategy {
    fn field(&self) -> SampleField {
        SampleField::ProcessStateAdv
    }

    fn description(&self) -> &'static str {
        "Process state: restore leading zero, resolve names to codes"
    }

    fn suggest(&self, sample: &SampleData) -> Result<Option<CorrectionSuggestion>> {
        let raw = target_value(sample, self.field())?;
        cached_suggest(&self.cache, self.field(), raw, |trimmed| {
            self.resolve(raw, trimmed)
        })
    }
}

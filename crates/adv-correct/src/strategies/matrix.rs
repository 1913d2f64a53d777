use std::sync::Arc;

use adv_catalog::CatalogPort;
use adv_model::{CorrectionCode, CorrectionSuggestion, SampleData, SampleField};
use tracing::debug;

use super::{MATRIX_CATALOG, cached_suggest, offer, probe_id, require_catalog};
use crate::cache::SuggestionCache;
use crate::error::Result;
use crate::patterns::pad_with_zero;
use crate::strategy::{CorrectionStrategy, target_value};

/// Matrix (ADV-3): five-digit legacy codes lost their leading zero.
pub struct MatrixStrategy {
    catalogs: Arc<dyn CatalogPort>,
    cache: SuggestionCache,
}

impl MatrixStrategy {
    pub fn new(catalogs: Arc<dyn CatalogPort>) -> Result<Self> {
        require_catalog(catalogs.as_ref(), MATRIX_CATALOG)?;
        debug!(field = %SampleField::MatrixAdv, "initialising correction strategy");
        Ok(Self {
            catalogs,
            cache: SuggestionCache::new(),
        })
    }
}

impl CorrectionStrategy for MatrixStrategy {
    fn field(&self) -> SampleField {
        SampleField::MatrixAdv
    }

    fn description(&self) -> &'static str {
        "Matrix: restore leading zero of 5-digit codes"
    }

    fn suggest(&self, sample: &SampleData) -> Result<Option<CorrectionSuggestion>> {
        let raw = target_value(sample, self.field())?;
        cached_suggest(&self.cache, self.field(), raw, |trimmed| {
            let Some(candidate) = pad_with_zero(trimmed, 5) else {
                return Ok(None);
            };
            Ok(probe_id(self.catalogs.as_ref(), MATRIX_CATALOG, &candidate)?
                .map(|code| offer(self.field(), raw, code, CorrectionCode::MATRIX)))
        })
    }
}

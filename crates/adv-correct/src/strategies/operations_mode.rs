use std::sync::Arc;

use adv_catalog::CatalogPort;
use adv_model::{CorrectionCode, CorrectionSuggestion, SampleData, SampleField};
use tracing::debug;

use super::{OPERATIONS_MODE_CATALOG, cached_suggest, offer, probe_id, require_catalog};
use crate::cache::SuggestionCache;
use crate::error::Result;
use crate::patterns::replace_suffix;
use crate::strategy::{CorrectionStrategy, target_value};

/// Placeholder runs and their replacements, tried in order.
const PLACEHOLDERS: [(&str, &str); 3] = [("xxx", "000"), ("xxxx", "0000"), ("xxxxxx", "000000")];

/// Operations mode (ADV-8): trailing `x` placeholders stand for zeros.
pub struct OperationsModeStrategy {
    catalogs: Arc<dyn CatalogPort>,
    cache: SuggestionCache,
}

impl OperationsModeStrategy {
    pub fn new(catalogs: Arc<dyn CatalogPort>) -> Result<Self> {
        require_catalog(catalogs.as_ref(), OPERATIONS_MODE_CATALOG)?;
        debug!(field = %SampleField::OperationsModeAdv, "initialising correction strategy");
        Ok(Self {
            catalogs,
            cache: SuggestionCache::new(),
        })
    }
}

impl CorrectionStrategy for OperationsModeStrategy {
    fn field(&self) -> SampleField {
        SampleField::OperationsModeAdv
    }

    fn description(&self) -> &'static str {
        "Operations mode: replace x placeholders with zeros"
    }

    fn suggest(&self, sample: &SampleData) -> Result<Option<CorrectionSuggestion>> {
        let raw = target_value(sample, self.field())?;
        cached_suggest(&self.cache, self.field(), raw, |trimmed| {
            for (suffix, zeros) in PLACEHOLDERS {
                let Some(candidate) = replace_suffix(trimmed, suffix, zeros) else {
                    continue;
                };
                if let Some(code) =
                    probe_id(self.catalogs.as_ref(), OPERATIONS_MODE_CATALOG, &candidate)?
                {
                    return Ok(Some(offer(
                        self.field(),
                        raw,
                        code,
                        CorrectionCode::OPERATIONS_MODE,
                    )));
                }
            }
            Ok(None)
        })
    }
}

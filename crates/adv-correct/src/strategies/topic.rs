use std::sync::Arc;

use adv_catalog::CatalogPort;
use adv_model::{CorrectionCode, CorrectionSuggestion, SampleData, SampleField};
use tracing::{debug, trace};

use super::{CODE_FIELD, CODING_SYSTEM_FIELD, MATRIX_CATALOG, offer, require_field};
use crate::cache::SuggestionCache;
use crate::error::Result;
use crate::strategy::{CorrectionStrategy, target_value};

/// Topic (ADV-2): the matrix code determines the topic through its coding
/// system in the matrix catalog.
pub struct TopicStrategy {
    catalogs: Arc<dyn CatalogPort>,
    /// Keyed by (trimmed topic, trimmed matrix).
    cache: SuggestionCache<(String, String)>,
}

impl TopicStrategy {
    pub fn new(catalogs: Arc<dyn CatalogPort>) -> Result<Self> {
        require_field(catalogs.as_ref(), MATRIX_CATALOG, CODING_SYSTEM_FIELD)?;
        debug!(
            field = %SampleField::TopicAdv,
            dependency = %SampleField::MatrixAdv,
            "initialising correction strategy"
        );
        Ok(Self {
            catalogs,
            cache: SuggestionCache::new(),
        })
    }

    fn resolve(&self, raw: &str, topic: &str, matrix: &str) -> Option<CorrectionSuggestion> {
        let dependencies =
            self.catalogs
                .entries_with_field_value(MATRIX_CATALOG, CODE_FIELD, matrix);
        // Unknown or ambiguous matrix codes leave the topic alone.
        let [entry] = dependencies.as_slice() else {
            return None;
        };
        let expected = entry.get(CODING_SYSTEM_FIELD)?.trim();
        if expected.is_empty() || expected == topic {
            return None;
        }
        Some(offer(
            self.field(),
            raw,
            expected.to_string(),
            CorrectionCode::DEPENDENCY_RESOLVED,
        ))
    }
}

impl CorrectionStrategy for TopicStrategy {
    fn field(&self) -> SampleField {
        SampleField::TopicAdv
    }

    fn description(&self) -> &'static str {
        "Topic: derive from the matrix coding system"
    }

    fn suggest(&self, sample: &SampleData) -> Result<Option<CorrectionSuggestion>> {
        let raw = target_value(sample, self.field())?;
        let topic = raw.trim();
        if topic.is_empty() {
            return Ok(None);
        }
        let matrix = sample.get(SampleField::MatrixAdv).unwrap_or("").trim();
        if matrix.is_empty() {
            return Ok(None);
        }

        let key = (topic.to_string(), matrix.to_string());
        if let Some(hit) = self.cache.get(&key, raw) {
            trace!(field = %self.field(), "correction cache hit");
            return Ok(Some(hit));
        }

        let suggestion = self.resolve(raw, topic, matrix);
        if let Some(suggestion) = &suggestion {
            self.cache.insert(key, suggestion.clone());
        }
        Ok(suggestion)
    }
}

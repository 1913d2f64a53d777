//! Batch orchestration.
//!
//! The engine runs every enabled strategy against every sample. A failing
//! `(sample, strategy)` pair is recorded next to the suggestions and never
//! aborts the batch.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use adv_catalog::CatalogPort;
use adv_model::{CorrectionSuggestion, SampleData, SampleField};
use serde::Serialize;
use tracing::{info, info_span, warn};

use crate::config::CorrectionConfig;
use crate::error::Result;
use crate::registry::StrategyRegistry;

/// A strategy that failed for one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyFailure {
    pub field: SampleField,
    pub message: String,
}

/// Outcome of all strategies for one sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SampleCorrections {
    /// `sample_id` of the input, when present.
    pub sample_id: Option<String>,
    /// Suggestions in registry order.
    pub suggestions: Vec<CorrectionSuggestion>,
    pub failures: Vec<StrategyFailure>,
}

impl SampleCorrections {
    pub fn is_clean(&self) -> bool {
        self.suggestions.is_empty() && self.failures.is_empty()
    }

    pub fn suggestion_for(&self, field: SampleField) -> Option<&CorrectionSuggestion> {
        self.suggestions.iter().find(|s| s.field == field)
    }
}

/// Per-sample results of a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub samples: Vec<SampleCorrections>,
}

impl BatchReport {
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn suggestion_count(&self) -> usize {
        self.samples.iter().map(|s| s.suggestions.len()).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.samples.iter().map(|s| s.failures.len()).sum()
    }

    pub fn has_suggestions(&self) -> bool {
        self.samples.iter().any(|s| !s.suggestions.is_empty())
    }

    /// Number of suggestions per field.
    pub fn suggestions_by_field(&self) -> BTreeMap<SampleField, usize> {
        let mut counts = BTreeMap::new();
        for suggestion in self.samples.iter().flat_map(|s| &s.suggestions) {
            *counts.entry(suggestion.field).or_insert(0) += 1;
        }
        counts
    }
}

pub struct CorrectionEngine {
    registry: StrategyRegistry,
}

impl CorrectionEngine {
    pub fn new(registry: StrategyRegistry) -> Self {
        Self { registry }
    }

    /// Builds the default registry over `catalogs`.
    pub fn from_catalogs(catalogs: Arc<dyn CatalogPort>, config: &CorrectionConfig) -> Result<Self> {
        Ok(Self::new(StrategyRegistry::from_catalogs(catalogs, config)?))
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut StrategyRegistry {
        &mut self.registry
    }

    /// Applies every enabled strategy to `sample`.
    pub fn correct_sample(&self, sample: &SampleData) -> SampleCorrections {
        let mut result = SampleCorrections {
            sample_id: sample.get(SampleField::SampleId).map(str::to_string),
            ..SampleCorrections::default()
        };

        for strategy in self.registry.enabled() {
            match strategy.suggest(sample) {
                Ok(Some(suggestion)) => result.suggestions.push(suggestion),
                Ok(None) => {}
                Err(error) => {
                    warn!(
                        field = %strategy.field(),
                        sample_id = result.sample_id.as_deref().unwrap_or(""),
                        error = %error,
                        "correction strategy failed"
                    );
                    result.failures.push(StrategyFailure {
                        field: strategy.field(),
                        message: error.to_string(),
                    });
                }
            }
        }
        result
    }

    /// Corrects `samples`, returning results in the same order.
    pub fn correct_batch(&self, samples: &[SampleData]) -> BatchReport {
        let span = info_span!("correct_batch", samples = samples.len());
        let _guard = span.enter();
        let start = Instant::now();

        let report = BatchReport {
            samples: samples
                .iter()
                .map(|sample| self.correct_sample(sample))
                .collect(),
        };

        info!(
            samples = report.sample_count(),
            suggestions = report.suggestion_count(),
            failures = report.failure_count(),
            duration_ms = start.elapsed().as_millis(),
            "batch corrected"
        );
        report
    }
}

//! Correction strategy trait.
//!
//! A strategy owns everything it needs to correct one sample field: the
//! catalog port, its parameters and its memo cache. Strategies are built
//! once by the [`StrategyRegistry`](crate::StrategyRegistry) and then shared
//! read-only between callers.

use adv_model::{CorrectionSuggestion, SampleData, SampleField};

use crate::error::{CorrectionError, Result};

/// Maps one sample to an optional suggestion for a single field.
///
/// # Contract
///
/// - A value that is empty after trimming yields `Ok(None)`.
/// - An absent target field yields [`CorrectionError::MissingField`].
/// - `original` of a returned suggestion is the raw, untrimmed input.
/// - Repeated calls with the same input return equal suggestions.
pub trait CorrectionStrategy: Send + Sync {
    /// The field this strategy corrects.
    fn field(&self) -> SampleField;

    /// Short human-readable description for reports.
    fn description(&self) -> &'static str {
        "Correction strategy"
    }

    /// Catalog label such as `ADV-16`, falling back to the wire name.
    fn label(&self) -> &'static str {
        let field = self.field();
        field.adv_label().unwrap_or(field.as_str())
    }

    /// Produces a suggestion for `sample`, or `None` when the value is
    /// already valid or cannot be resolved.
    ///
    /// # Errors
    ///
    /// Fails when the target field is absent or a catalog or search call
    /// fails. Errors concern this sample only.
    fn suggest(&self, sample: &SampleData) -> Result<Option<CorrectionSuggestion>>;
}

/// Raw value of `field`, or [`CorrectionError::MissingField`].
pub(crate) fn target_value(sample: &SampleData, field: SampleField) -> Result<&str> {
    sample
        .get(field)
        .ok_or(CorrectionError::MissingField { field })
}

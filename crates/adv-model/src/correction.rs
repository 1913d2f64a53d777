//! Correction suggestions produced by the auto-correction engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sample::SampleField;

/// Confidence tier of a suggestion.
///
/// The value is an ordinal tag describing how a suggestion was derived, not
/// a probability. Higher values come from more reliable rules; `0` marks an
/// unverified fuzzy result that needs human review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrectionCode(u8);

impl CorrectionCode {
    /// Topic resolved through the matrix catalog.
    pub const DEPENDENCY_RESOLVED: Self = Self(93);
    pub const PROCESS_STATE: Self = Self(92);
    pub const MATRIX: Self = Self(91);
    pub const OPERATIONS_MODE: Self = Self(90);
    pub const SAMPLING_LOCATION: Self = Self(89);
    /// Pathogen resolved by prefixing "Genus ".
    pub const PATHOGEN_GENUS: Self = Self(88);
    /// Pathogen resolved from a numeric catalog code.
    pub const PATHOGEN_CODE: Self = Self(87);
    /// Ranked fuzzy candidates.
    pub const UNVERIFIED: Self = Self(0);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns false for fuzzy results.
    pub fn is_verified(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for CorrectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A proposed replacement for one field of one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionSuggestion {
    /// Field the suggestion applies to.
    pub field: SampleField,
    /// Raw input exactly as received, surrounding whitespace included.
    pub original: String,
    /// Candidate canonical values, best first.
    pub correction_offer: Vec<String>,
    pub code: CorrectionCode,
}

impl CorrectionSuggestion {
    pub fn new(
        field: SampleField,
        original: impl Into<String>,
        correction_offer: Vec<String>,
        code: CorrectionCode,
    ) -> Self {
        Self {
            field,
            original: original.into(),
            correction_offer,
            code,
        }
    }

    /// The engine's best guess.
    pub fn best(&self) -> Option<&str> {
        self.correction_offer.first().map(String::as_str)
    }

    /// Copy of this suggestion reporting a different raw input.
    #[must_use]
    pub fn with_original(&self, original: &str) -> Self {
        Self {
            original: original.to_string(),
            ..self.clone()
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// A catalog field taking part in scoring, with its relative weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedField {
    pub name: String,
    pub weight: f64,
}

impl WeightedField {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Options for building a [`FuzzyIndex`](crate::FuzzyIndex).
///
/// Defaults match the pathogen catalog: results are identified by `Text1`,
/// scored 0.9 on `Text1` and 0.1 on `P-Code3`, with a moderately permissive
/// threshold of 0.6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyIndexOptions {
    /// Field whose value is reported as the hit item.
    pub id_field: String,
    pub weighted_fields: Vec<WeightedField>,
    /// Maximum accepted score (0.0 exact, 1.0 nothing in common).
    pub similarity_threshold: f64,
    /// Queries longer than this many characters are rejected.
    pub max_pattern_length: usize,
    /// Query tokens shorter than this are ignored.
    pub min_match_length: usize,
    pub case_sensitive: bool,
    /// Every query token must match some field token within the threshold.
    pub match_all_tokens: bool,
}

impl Default for FuzzyIndexOptions {
    fn default() -> Self {
        Self {
            id_field: "Text1".to_string(),
            weighted_fields: vec![
                WeightedField::new("Text1", 0.9),
                WeightedField::new("P-Code3", 0.1),
            ],
            similarity_threshold: 0.6,
            max_pattern_length: 100,
            min_match_length: 1,
            case_sensitive: false,
            match_all_tokens: true,
        }
    }
}

impl FuzzyIndexOptions {
    pub fn new(id_field: impl Into<String>, weighted_fields: Vec<WeightedField>) -> Self {
        Self {
            id_field: id_field.into(),
            weighted_fields,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_max_pattern_length(mut self, max: usize) -> Self {
        self.max_pattern_length = max;
        self
    }

    #[must_use]
    pub fn with_min_match_length(mut self, min: usize) -> Self {
        self.min_match_length = min;
        self
    }

    #[must_use]
    pub fn with_case_sensitive(mut self, enable: bool) -> Self {
        self.case_sensitive = enable;
        self
    }

    #[must_use]
    pub fn with_match_all_tokens(mut self, enable: bool) -> Self {
        self.match_all_tokens = enable;
        self
    }

    /// Field names referenced by these options (id field first).
    pub fn referenced_fields(&self) -> Vec<&str> {
        let mut names = vec![self.id_field.as_str()];
        for field in &self.weighted_fields {
            if !names.contains(&field.name.as_str()) {
                names.push(field.name.as_str());
            }
        }
        names
    }

    pub fn validate(&self) -> Result<()> {
        if self.id_field.trim().is_empty() {
            return Err(invalid("id_field must not be empty"));
        }
        if self.weighted_fields.is_empty() {
            return Err(invalid("at least one weighted field is required"));
        }
        if self
            .weighted_fields
            .iter()
            .any(|field| !field.weight.is_finite() || field.weight < 0.0)
        {
            return Err(invalid("weights must be finite and non-negative"));
        }
        if self.total_weight() <= 0.0 {
            return Err(invalid("weights must sum to a positive value"));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(invalid(format!(
                "similarity_threshold {} is outside [0, 1]",
                self.similarity_threshold
            )));
        }
        if self.max_pattern_length == 0 {
            return Err(invalid("max_pattern_length must be positive"));
        }
        Ok(())
    }

    /// Weights scaled to sum to 1.0, in field order.
    pub(crate) fn normalized_weights(&self) -> Vec<f64> {
        let total = self.total_weight();
        self.weighted_fields
            .iter()
            .map(|field| field.weight / total)
            .collect()
    }

    fn total_weight(&self) -> f64 {
        self.weighted_fields.iter().map(|field| field.weight).sum()
    }
}

fn invalid(message: impl Into<String>) -> SearchError {
    SearchError::InvalidOptions {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = FuzzyIndexOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.referenced_fields(), vec!["Text1", "P-Code3"]);
    }

    #[test]
    fn weights_are_normalized() {
        let options = FuzzyIndexOptions::new(
            "Text1",
            vec![WeightedField::new("Text1", 3.0), WeightedField::new("Kode", 1.0)],
        );
        assert_eq!(options.normalized_weights(), vec![0.75, 0.25]);
    }

    #[test]
    fn rejects_bad_options() {
        assert!(
            FuzzyIndexOptions::new("Text1", Vec::new())
                .validate()
                .is_err()
        );
        assert!(
            FuzzyIndexOptions::default()
                .with_threshold(1.5)
                .validate()
                .is_err()
        );
        assert!(
            FuzzyIndexOptions::default()
                .with_max_pattern_length(0)
                .validate()
                .is_err()
        );
        assert!(
            FuzzyIndexOptions::new("Text1", vec![WeightedField::new("Text1", 0.0)])
                .validate()
                .is_err()
        );
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let options: FuzzyIndexOptions = toml::from_str("similarity_threshold = 0.4").unwrap();
        assert_eq!(options.similarity_threshold, 0.4);
        assert_eq!(options.id_field, "Text1");
        assert_eq!(options.max_pattern_length, 100);
    }
}

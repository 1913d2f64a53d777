//! Sample records as submitted by laboratories.
//!
//! A sample is a flat record of string values keyed by [`SampleField`]. The
//! ADV fields carry codes from the reference catalogs; the remaining fields
//! are free text that travels with the record.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::correction::CorrectionSuggestion;
use crate::error::ModelError;

/// Fields of a sample record.
///
/// Wire names are the snake_case column names used in upload files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleField {
    SampleId,
    SampleIdAvv,
    PathogenAdv,
    PathogenText,
    SamplingDate,
    IsolationDate,
    SamplingLocationAdv,
    SamplingLocationZip,
    SamplingLocationText,
    TopicAdv,
    MatrixAdv,
    MatrixText,
    ProcessStateAdv,
    SamplingReasonAdv,
    SamplingReasonText,
    OperationsModeAdv,
    OperationsModeText,
    Vvvo,
    Comment,
}

impl SampleField {
    /// All fields in upload column order.
    pub const ALL: [SampleField; 19] = [
        SampleField::SampleId,
        SampleField::SampleIdAvv,
        SampleField::PathogenAdv,
        SampleField::PathogenText,
        SampleField::SamplingDate,
        SampleField::IsolationDate,
        SampleField::SamplingLocationAdv,
        SampleField::SamplingLocationZip,
        SampleField::SamplingLocationText,
        SampleField::TopicAdv,
        SampleField::MatrixAdv,
        SampleField::MatrixText,
        SampleField::ProcessStateAdv,
        SampleField::SamplingReasonAdv,
        SampleField::SamplingReasonText,
        SampleField::OperationsModeAdv,
        SampleField::OperationsModeText,
        SampleField::Vvvo,
        SampleField::Comment,
    ];

    /// Returns the wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleField::SampleId => "sample_id",
            SampleField::SampleIdAvv => "sample_id_avv",
            SampleField::PathogenAdv => "pathogen_adv",
            SampleField::PathogenText => "pathogen_text",
            SampleField::SamplingDate => "sampling_date",
            SampleField::IsolationDate => "isolation_date",
            SampleField::SamplingLocationAdv => "sampling_location_adv",
            SampleField::SamplingLocationZip => "sampling_location_zip",
            SampleField::SamplingLocationText => "sampling_location_text",
            SampleField::TopicAdv => "topic_adv",
            SampleField::MatrixAdv => "matrix_adv",
            SampleField::MatrixText => "matrix_text",
            SampleField::ProcessStateAdv => "process_state_adv",
            SampleField::SamplingReasonAdv => "sampling_reason_adv",
            SampleField::SamplingReasonText => "sampling_reason_text",
            SampleField::OperationsModeAdv => "operations_mode_adv",
            SampleField::OperationsModeText => "operations_mode_text",
            SampleField::Vvvo => "vvvo",
            SampleField::Comment => "comment",
        }
    }

    /// ADV catalog label for coded fields (e.g. "ADV-16" for the pathogen).
    pub fn adv_label(&self) -> Option<&'static str> {
        match self {
            SampleField::TopicAdv => Some("ADV-2"),
            SampleField::MatrixAdv => Some("ADV-3"),
            SampleField::ProcessStateAdv => Some("ADV-12"),
            SampleField::SamplingReasonAdv => Some("ADV-4"),
            SampleField::OperationsModeAdv => Some("ADV-8"),
            SampleField::SamplingLocationAdv => Some("ADV-9"),
            SampleField::PathogenAdv => Some("ADV-16"),
            _ => None,
        }
    }

    /// Returns true for fields coded against an ADV catalog.
    pub fn is_adv(&self) -> bool {
        self.adv_label().is_some()
    }
}

impl fmt::Display for SampleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleField {
    type Err = ModelError;

    /// Parses a wire name, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        SampleField::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownField {
                name: s.to_string(),
            })
    }
}

/// One laboratory sample.
///
/// Fields may be absent when the upload did not carry the column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleData {
    values: BTreeMap<SampleField, String>,
}

impl SampleData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: SampleField, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn insert(&mut self, field: SampleField, value: impl Into<String>) -> Option<String> {
        self.values.insert(field, value.into())
    }

    pub fn get(&self, field: SampleField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: SampleField) -> bool {
        self.values.contains_key(&field)
    }

    /// Iterates over present fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SampleField, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replaces the suggestion's field with its best candidate.
    ///
    /// Returns false (and leaves the sample untouched) when the suggestion
    /// has no candidates.
    pub fn apply_correction(&mut self, suggestion: &CorrectionSuggestion) -> bool {
        match suggestion.best() {
            Some(best) => {
                self.values.insert(suggestion.field, best.to_string());
                true
            }
            None => false,
        }
    }
}

impl FromIterator<(SampleField, String)> for SampleData {
    fn from_iter<T: IntoIterator<Item = (SampleField, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#![deny(unsafe_code)]

pub mod catalog;
pub mod correction;
pub mod error;
pub mod sample;

pub use catalog::{CatalogEntry, SearchAlias};
pub use correction::{CorrectionCode, CorrectionSuggestion};
pub use error::{ModelError, Result};
pub use sample::{SampleData, SampleField};

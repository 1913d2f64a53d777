#![deny(unsafe_code)]

pub mod error;
pub mod index;
pub mod options;
pub mod score;

pub use error::{Result, SearchError};
pub use index::{FuzzyIndex, SearchHit};
pub use options::{FuzzyIndexOptions, WeightedField};

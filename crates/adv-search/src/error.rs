//! Error types for fuzzy search.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Query exceeds the configured maximum pattern length.
    #[error("search pattern has {length} characters, maximum is {max}")]
    PatternTooLong { length: usize, max: usize },

    #[error("invalid fuzzy index options: {message}")]
    InvalidOptions { message: String },
}

pub type Result<T> = std::result::Result<T, SearchError>;

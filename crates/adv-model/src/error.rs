use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown sample field: {name}")]
    UnknownField { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;

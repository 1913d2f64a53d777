use adv_catalog::CatalogError;
use adv_model::SampleField;
use adv_search::SearchError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CorrectionError {
    /// A strategy could not be set up; fatal at start-up.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("sample has no {field} field")]
    MissingField { field: SampleField },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl CorrectionError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CorrectionError>;

#![deny(unsafe_code)]

use std::path::PathBuf;

use adv_search::SearchError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("unknown catalog: {catalog}")]
    UnknownCatalog { catalog: String },

    #[error("no entry with id '{id}' in catalog {catalog}")]
    EntryNotFound { catalog: String, id: String },

    #[error("catalog {catalog} has no field '{field}'")]
    UnknownField { catalog: String, field: String },

    #[error("duplicate id '{id}' in catalog {catalog}")]
    DuplicateId { catalog: String, id: String },

    #[error("row {row} of catalog {catalog} has no value for id field '{id_field}'")]
    MissingId {
        catalog: String,
        id_field: String,
        row: usize,
    },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to parse TOML manifest {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse alias file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid manifest: {message}")]
    InvalidManifest { message: String },

    #[error("invalid path {path}: {message}")]
    InvalidPath { path: PathBuf, message: String },

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unknown_catalog(catalog: &str) -> Self {
        Self::UnknownCatalog {
            catalog: catalog.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod paths;
pub mod port;
pub mod store;

pub use crate::catalog::Catalog;
pub use crate::error::{CatalogError, Result};
pub use crate::loader::{LoadedCatalogs, load_aliases, load_catalog_csv, load_catalog_dir};
pub use crate::manifest::{CatalogManifest, ManifestCatalog};
pub use crate::paths::{CATALOG_DIR_ENV_VAR, default_catalog_dir};
pub use crate::port::CatalogPort;
pub use crate::store::CatalogStore;

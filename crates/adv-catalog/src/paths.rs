//! Catalog directory resolution.

use std::path::PathBuf;

/// Environment variable for overriding the catalog directory.
pub const CATALOG_DIR_ENV_VAR: &str = "ADV_CATALOG_DIR";

/// Get the catalog root directory.
///
/// Resolution order:
/// 1. `ADV_CATALOG_DIR` environment variable
/// 2. `catalogs/` under the current working directory
pub fn default_catalog_dir() -> PathBuf {
    if let Ok(root) = std::env::var(CATALOG_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from("catalogs")
}

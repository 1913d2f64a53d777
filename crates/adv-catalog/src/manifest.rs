use serde::{Deserialize, Serialize};

use adv_search::FuzzyIndexOptions;

use crate::error::{CatalogError, Result};

pub const MANIFEST_FILE: &str = "manifest.toml";
pub const MANIFEST_SCHEMA: &str = "adv-catalogs";
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

/// Contents of `manifest.toml` in a catalog directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub manifest: ManifestHeader,
    pub catalogs: Vec<ManifestCatalog>,
    /// Path of the alias JSON file, relative to the catalog directory.
    #[serde(default)]
    pub aliases: Option<String>,
    /// Overrides for the pathogen fuzzy index.
    #[serde(default)]
    pub fuzzy: Option<FuzzyIndexOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestCatalog {
    pub name: String,
    pub path: String,
    #[serde(default = "default_id_field")]
    pub id_field: String,
}

fn default_id_field() -> String {
    "Kode".to_string()
}

impl CatalogManifest {
    pub fn validate(&self) -> Result<()> {
        if self.manifest.schema != MANIFEST_SCHEMA {
            return Err(invalid(format!(
                "unsupported schema: {}",
                self.manifest.schema
            )));
        }
        if self.manifest.schema_version != MANIFEST_SCHEMA_VERSION {
            return Err(invalid(format!(
                "unsupported schema_version: {}",
                self.manifest.schema_version
            )));
        }

        let mut seen: Vec<String> = Vec::with_capacity(self.catalogs.len());
        for catalog in &self.catalogs {
            if catalog.name.trim().is_empty() {
                return Err(invalid("catalog name must not be empty"));
            }
            if catalog.path.trim().is_empty() {
                return Err(invalid(format!("catalog {} has no path", catalog.name)));
            }
            let key = catalog.name.to_lowercase();
            if seen.contains(&key) {
                return Err(invalid(format!("duplicate catalog: {}", catalog.name)));
            }
            seen.push(key);
        }

        if let Some(fuzzy) = &self.fuzzy {
            fuzzy.validate()?;
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> CatalogError {
    CatalogError::InvalidManifest {
        message: message.into(),
    }
}

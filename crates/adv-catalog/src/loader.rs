//! Loading catalogs and aliases from disk.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use adv_model::{CatalogEntry, SearchAlias};
use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::manifest::{CatalogManifest, MANIFEST_FILE};
use crate::store::CatalogStore;

/// A catalog directory after loading: the populated store and the manifest
/// it was described by.
#[derive(Debug, Clone)]
pub struct LoadedCatalogs {
    pub store: CatalogStore,
    pub manifest: CatalogManifest,
    pub root: PathBuf,
}

/// Loads every catalog and the alias table listed in `dir/manifest.toml`.
pub fn load_catalog_dir(dir: &Path) -> Result<LoadedCatalogs> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let manifest = load_manifest(&manifest_path)?;
    manifest.validate()?;

    let mut store = CatalogStore::new();
    for spec in &manifest.catalogs {
        let path = dir.join(validate_relative_path(&spec.path)?);
        let catalog = load_catalog_csv(&path, &spec.name, &spec.id_field)?;
        store.insert(catalog);
    }

    if let Some(aliases) = &manifest.aliases {
        let path = dir.join(validate_relative_path(aliases)?);
        store = store.with_aliases(load_aliases(&path)?);
    }

    info!(
        dir = %dir.display(),
        catalogs = manifest.catalogs.len(),
        aliases = store.aliases().len(),
        "catalogs loaded"
    );

    Ok(LoadedCatalogs {
        store,
        manifest,
        root: dir.to_path_buf(),
    })
}

/// Reads one catalog CSV. The header row names the entry fields.
pub fn load_catalog_csv(path: &Path, name: &str, id_field: &str) -> Result<Catalog> {
    let entries: Vec<CatalogEntry> = read_csv_rows(path)?
        .into_iter()
        .map(|row| {
            row.into_iter()
                .filter(|(_, value)| !value.is_empty())
                .collect()
        })
        .collect();
    debug!(catalog = name, path = %path.display(), entries = entries.len(), "catalog read");
    Catalog::new(name, id_field, entries)
}

/// Reads a JSON array of [`SearchAlias`] records.
pub fn load_aliases(path: &Path) -> Result<Vec<SearchAlias>> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| CatalogError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

fn load_manifest(path: &Path) -> Result<CatalogManifest> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| CatalogError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Rows as header -> value maps. Header BOMs are stripped, values trimmed and
/// rows without any value skipped.
fn read_csv_rows(path: &Path) -> Result<Vec<BTreeMap<String, String>>> {
    let csv_error = |source| CatalogError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let row = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, value)| (header.clone(), value.trim().to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

fn validate_relative_path(path: &str) -> Result<&Path> {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return Err(CatalogError::InvalidPath {
            path: PathBuf::from(path),
            message: "manifest path must be relative".to_string(),
        });
    }
    if candidate
        .components()
        .any(|component| matches!(component, Component::ParentDir))
    {
        return Err(CatalogError::InvalidPath {
            path: PathBuf::from(path),
            message: "manifest path must not leave the catalog directory".to_string(),
        });
    }
    Ok(candidate)
}

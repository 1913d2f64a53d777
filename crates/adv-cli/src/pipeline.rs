//! Steps shared by the `advcheck` subcommands.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use adv_catalog::{CatalogPort, CatalogStore, LoadedCatalogs, load_catalog_dir};
use adv_correct::strategies::{PATHOGEN_CATALOG, TEXT_FIELD};
use adv_correct::{BatchReport, CorrectionConfig, CorrectionEngine};
use adv_model::{CorrectionCode, SampleField};
use adv_search::{FuzzyIndexOptions, SearchHit, WeightedField};
use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use crate::samples::SampleTable;

/// Settings of one `correct` run.
#[derive(Debug, Clone)]
pub struct CorrectOptions {
    pub disabled: Vec<SampleField>,
    /// Apply suggestions of at least this code to the table.
    pub apply_min_code: Option<CorrectionCode>,
}

#[derive(Debug)]
pub struct CorrectOutcome {
    pub table: SampleTable,
    pub report: BatchReport,
    /// Cells changed in `table`.
    pub applied: usize,
}

pub fn load_catalogs(dir: &Path) -> Result<LoadedCatalogs> {
    load_catalog_dir(dir).with_context(|| format!("load catalogs from {}", dir.display()))
}

/// Engine configuration with the manifest's pathogen index overrides.
pub fn correction_config(loaded: &LoadedCatalogs) -> CorrectionConfig {
    match &loaded.manifest.fuzzy {
        Some(options) => CorrectionConfig::default().with_pathogen_index(options.clone()),
        None => CorrectionConfig::default(),
    }
}

/// Builds the engine and switches off the strategies for `disabled`.
pub fn build_engine(loaded: &LoadedCatalogs, disabled: &[SampleField]) -> Result<CorrectionEngine> {
    let catalogs: Arc<dyn CatalogPort> = Arc::new(loaded.store.clone());
    let mut engine = CorrectionEngine::from_catalogs(catalogs, &correction_config(loaded))
        .context("set up correction strategies")?;
    for field in disabled {
        if !engine.registry_mut().disable(*field) {
            bail!("no correction strategy for field {field}");
        }
    }
    Ok(engine)
}

/// Reads `samples`, runs the engine over them and optionally applies the
/// accepted suggestions.
pub fn correct_file(
    loaded: &LoadedCatalogs,
    samples: &Path,
    options: &CorrectOptions,
) -> Result<CorrectOutcome> {
    let engine = build_engine(loaded, &options.disabled)?;
    let mut table = SampleTable::read_csv(samples)?;
    if table.is_empty() {
        info!(path = %samples.display(), "upload contains no samples");
    }

    let report = engine.correct_batch(&table.samples());
    let applied = match options.apply_min_code {
        Some(min_code) => table.apply_corrections(&report, min_code),
        None => 0,
    };

    Ok(CorrectOutcome {
        table,
        report,
        applied,
    })
}

/// Index options for an ad-hoc search.
///
/// Explicit `fields` are weighted equally and reported by `Text1`. Without
/// fields the pathogen catalog uses its configured index and every other
/// catalog scores on `Text1` alone.
pub fn search_options(loaded: &LoadedCatalogs, catalog: &str, fields: &[String]) -> FuzzyIndexOptions {
    if !fields.is_empty() {
        let weighted = fields
            .iter()
            .map(|name| WeightedField::new(name.as_str(), 1.0))
            .collect();
        return FuzzyIndexOptions::new(TEXT_FIELD, weighted);
    }
    if catalog.eq_ignore_ascii_case(PATHOGEN_CATALOG) {
        return correction_config(loaded).pathogen_index;
    }
    FuzzyIndexOptions::new(TEXT_FIELD, vec![WeightedField::new(TEXT_FIELD, 1.0)])
}

pub fn search_catalog(
    store: &CatalogStore,
    catalog: &str,
    query: &str,
    options: &FuzzyIndexOptions,
) -> Result<Vec<SearchHit>> {
    let span = info_span!("search", catalog = %catalog);
    let _guard = span.enter();
    let start = Instant::now();

    let index = store
        .build_fuzzy_index(catalog, options)
        .with_context(|| format!("build fuzzy index for {catalog}"))?;
    let hits = index.search(query).context("search")?;

    info!(
        indexed = index.len(),
        hits = hits.len(),
        duration_ms = start.elapsed().as_millis(),
        "search complete"
    );
    Ok(hits)
}

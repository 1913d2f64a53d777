//! Field-specific correction strategies.
//!
//! | Field | Catalog | Stages | Codes |
//! |-------|---------|--------|-------|
//! | topic_adv (ADV-2) | adv3 via matrix_adv | dependency lookup | 93 |
//! | process_state_adv (ADV-12) | adv12 | pad-zero 2, `Text1` lookup | 92 |
//! | matrix_adv (ADV-3) | adv3 | pad-zero 5 | 91 |
//! | operations_mode_adv (ADV-8) | adv8 | `x` suffix to zeros | 90 |
//! | sampling_location_adv (ADV-9) | adv9 | strip `xxx`, pad-zero | 89 |
//! | pathogen_adv (ADV-16) | adv16 | code, genus, alias, fuzzy | 87 / 88 / 0 |

mod matrix;
mod operations_mode;
mod pathogen;
mod process_state;
mod sampling_location;
mod topic;

pub use matrix::MatrixStrategy;
pub use operations_mode::OperationsModeStrategy;
pub use pathogen::PathogenStrategy;
pub use process_state::ProcessStateStrategy;
pub use sampling_location::SamplingLocationStrategy;
pub use topic::TopicStrategy;

use adv_catalog::CatalogPort;
use adv_model::{CorrectionCode, CorrectionSuggestion, SampleField};
use tracing::trace;

use crate::cache::SuggestionCache;
use crate::error::{CorrectionError, Result};

/// Id field shared by all ADV catalogs.
pub const CODE_FIELD: &str = "Kode";
/// Primary display text of a catalog entry.
pub const TEXT_FIELD: &str = "Text1";
/// Coding system of a matrix entry, i.e. the topic it belongs to.
pub const CODING_SYSTEM_FIELD: &str = "Kodiersystem";

pub const MATRIX_CATALOG: &str = "adv3";
pub const OPERATIONS_MODE_CATALOG: &str = "adv8";
pub const SAMPLING_LOCATION_CATALOG: &str = "adv9";
pub const PROCESS_STATE_CATALOG: &str = "adv12";
pub const PATHOGEN_CATALOG: &str = "adv16";

/// Shared flow of the single-field strategies: empty guard, cache lookup,
/// computation and caching of positive results.
pub(crate) fn cached_suggest<F>(
    cache: &SuggestionCache,
    field: SampleField,
    raw: &str,
    compute: F,
) -> Result<Option<CorrectionSuggestion>>
where
    F: FnOnce(&str) -> Result<Option<CorrectionSuggestion>>,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Some(hit) = cache.get(trimmed, raw) {
        trace!(field = %field, "correction cache hit");
        return Ok(Some(hit));
    }
    let suggestion = compute(trimmed)?;
    if let Some(suggestion) = &suggestion {
        cache.insert(trimmed.to_string(), suggestion.clone());
    }
    Ok(suggestion)
}

/// Code of the entry with id `candidate`, if the catalog has one.
pub(crate) fn probe_id(
    catalogs: &dyn CatalogPort,
    catalog: &str,
    candidate: &str,
) -> Result<Option<String>> {
    probe_id_field(catalogs, catalog, candidate, CODE_FIELD)
}

/// Value of `offer_field` on the entry with id `candidate`.
///
/// Falls back to `candidate` itself when the entry lacks the field.
pub(crate) fn probe_id_field(
    catalogs: &dyn CatalogPort,
    catalog: &str,
    candidate: &str,
    offer_field: &str,
) -> Result<Option<String>> {
    if !catalogs.contains_id(catalog, candidate) {
        return Ok(None);
    }
    let entry = catalogs.get_entry_by_id(catalog, candidate)?;
    Ok(Some(entry.get(offer_field).unwrap_or(candidate).to_string()))
}

pub(crate) fn require_catalog(catalogs: &dyn CatalogPort, catalog: &str) -> Result<()> {
    if catalogs.has_catalog(catalog) {
        Ok(())
    } else {
        Err(CorrectionError::configuration(format!(
            "catalog {catalog} is not loaded"
        )))
    }
}

pub(crate) fn require_field(catalogs: &dyn CatalogPort, catalog: &str, field: &str) -> Result<()> {
    require_catalog(catalogs, catalog)?;
    if catalogs.has_field(catalog, field) {
        Ok(())
    } else {
        Err(CorrectionError::configuration(format!(
            "catalog {catalog} has no {field} field"
        )))
    }
}

pub(crate) fn offer(
    field: SampleField,
    raw: &str,
    value: String,
    code: CorrectionCode,
) -> CorrectionSuggestion {
    CorrectionSuggestion::new(field, raw, vec![value], code)
}

//! Terminal and JSON rendering of command results.

use std::collections::BTreeMap;

use adv_catalog::CatalogStore;
use adv_correct::{BatchReport, SampleCorrections};
use adv_model::{CorrectionCode, CorrectionSuggestion, SampleField};
use adv_search::SearchHit;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

pub const REPORT_SCHEMA: &str = "advcheck-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Offers shown per suggestion before the rest is summarised.
const SHOWN_OFFERS: usize = 3;

/// Whether rendered tables may contain ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Styling {
    Color,
    Plain,
}

/// Machine-readable output of `advcheck correct --output json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub summary: ReportSummary,
    pub samples: &'a [SampleCorrections],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub samples: usize,
    pub suggestions: usize,
    pub failures: usize,
    pub applied: usize,
}

impl<'a> JsonReport<'a> {
    pub fn new(report: &'a BatchReport, applied: usize) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            summary: ReportSummary {
                samples: report.sample_count(),
                suggestions: report.suggestion_count(),
                failures: report.failure_count(),
                applied,
            },
            samples: &report.samples,
        }
    }
}

/// One row per suggestion, in sample order. `None` when nothing was
/// suggested.
pub fn suggestion_table(report: &BatchReport, styling: Styling) -> Option<Table> {
    if !report.has_suggestions() {
        return None;
    }
    let mut table = new_table(styling);
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Sample"),
        header_cell("Field"),
        header_cell("Original"),
        header_cell("Suggestion"),
        header_cell("Code"),
    ]);
    for (index, sample) in report.samples.iter().enumerate() {
        for suggestion in &sample.suggestions {
            table.add_row(vec![
                Cell::new(index + 1),
                sample_cell(sample.sample_id.as_deref()),
                field_cell(suggestion.field),
                Cell::new(format!("{:?}", suggestion.original)),
                Cell::new(offer_text(suggestion)),
                code_cell(suggestion.code),
            ]);
        }
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    Some(table)
}

/// Strategy failures, one row each. `None` when every strategy ran.
pub fn failure_table(report: &BatchReport, styling: Styling) -> Option<Table> {
    if report.failure_count() == 0 {
        return None;
    }
    let mut table = new_table(styling);
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Sample"),
        header_cell("Field"),
        header_cell("Error"),
    ]);
    for (index, sample) in report.samples.iter().enumerate() {
        for failure in &sample.failures {
            table.add_row(vec![
                Cell::new(index + 1),
                sample_cell(sample.sample_id.as_deref()),
                field_cell(failure.field),
                Cell::new(&failure.message).fg(Color::Red),
            ]);
        }
    }
    align_column(&mut table, 0, CellAlignment::Right);
    Some(table)
}

/// Suggestion and failure counts per field with a total row.
pub fn field_summary_table(report: &BatchReport, styling: Styling) -> Table {
    let suggestions = report.suggestions_by_field();
    let mut failures: BTreeMap<SampleField, usize> = BTreeMap::new();
    for failure in report.samples.iter().flat_map(|s| &s.failures) {
        *failures.entry(failure.field).or_insert(0) += 1;
    }

    let mut fields: Vec<SampleField> = suggestions.keys().chain(failures.keys()).copied().collect();
    fields.sort();
    fields.dedup();

    let mut table = new_table(styling);
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Suggestions"),
        header_cell("Failures"),
    ]);
    for field in fields {
        table.add_row(vec![
            field_cell(field),
            count_cell(suggestions.get(&field).copied().unwrap_or(0), Color::Yellow),
            count_cell(failures.get(&field).copied().unwrap_or(0), Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.suggestion_count())
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.failure_count())
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

/// Full text report of a batch.
pub fn render_correction_report(report: &BatchReport, applied: usize, styling: Styling) -> String {
    let mut out = String::new();
    if let Some(table) = suggestion_table(report, styling) {
        out.push_str("Suggestions:\n");
        out.push_str(&table.to_string());
        out.push('\n');
    }
    if let Some(table) = failure_table(report, styling) {
        out.push_str("Failures:\n");
        out.push_str(&table.to_string());
        out.push('\n');
    }
    out.push_str(&field_summary_table(report, styling).to_string());
    out.push('\n');
    out.push_str(&format!(
        "{} samples, {} suggestions, {} failures",
        report.sample_count(),
        report.suggestion_count(),
        report.failure_count()
    ));
    if applied > 0 {
        out.push_str(&format!(", {applied} corrections applied"));
    }
    out.push('\n');
    out
}

/// Loaded catalogs with entry and alias counts.
pub fn catalog_table(store: &CatalogStore, styling: Styling) -> Table {
    let mut table = new_table(styling);
    table.set_header(vec![
        header_cell("Catalog"),
        header_cell("Id field"),
        header_cell("Entries"),
        header_cell("Aliases"),
    ]);
    for catalog in store.catalogs() {
        let aliases: usize = store
            .aliases()
            .iter()
            .filter(|alias| alias.catalog.eq_ignore_ascii_case(catalog.name()))
            .map(|alias| alias.alias.len())
            .sum();
        table.add_row(vec![
            Cell::new(catalog.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(catalog.id_field()),
            Cell::new(catalog.len()),
            count_cell(aliases, Color::Reset),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table
}

/// Ranked fuzzy hits.
pub fn search_table(hits: &[SearchHit], styling: Styling) -> Table {
    let mut table = new_table(styling);
    table.set_header(vec![
        header_cell("#"),
        header_cell("Item"),
        header_cell("Score"),
    ]);
    for (rank, hit) in hits.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&hit.item),
            Cell::new(format!("{:.3}", hit.score)),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

fn offer_text(suggestion: &CorrectionSuggestion) -> String {
    let shown: Vec<&str> = suggestion
        .correction_offer
        .iter()
        .take(SHOWN_OFFERS)
        .map(String::as_str)
        .collect();
    let hidden = suggestion.correction_offer.len().saturating_sub(SHOWN_OFFERS);
    if hidden > 0 {
        format!("{} (+{hidden} more)", shown.join(", "))
    } else {
        shown.join(", ")
    }
}

fn new_table(styling: Styling) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    match styling {
        Styling::Color => table.enforce_styling(),
        Styling::Plain => table.force_no_tty(),
    };
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(field: SampleField) -> Cell {
    match field.adv_label() {
        Some(label) => Cell::new(format!("{field} ({label})")),
        None => Cell::new(field),
    }
}

fn sample_cell(sample_id: Option<&str>) -> Cell {
    match sample_id {
        Some(id) if !id.trim().is_empty() => Cell::new(id),
        _ => dim_cell("-"),
    }
}

fn code_cell(code: CorrectionCode) -> Cell {
    if code.is_verified() {
        Cell::new(code).fg(Color::Green)
    } else {
        Cell::new(code).fg(Color::Yellow)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

//! Sample upload files.
//!
//! Uploads are CSV files with one sample per row. Columns named after a
//! [`SampleField`] wire name feed the correction engine; any other column is
//! carried through unchanged so a corrected file keeps its original layout.
//! Cell values are kept verbatim because strategies report the raw input.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use adv_correct::BatchReport;
use adv_model::{CorrectionCode, SampleData, SampleField};
use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::logging::redact_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Field(SampleField),
    /// Index into the row's pass-through values.
    Extra(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SampleRow {
    data: SampleData,
    extra: Vec<String>,
}

/// A parsed upload, in file order.
#[derive(Debug, Clone)]
pub struct SampleTable {
    headers: Vec<String>,
    columns: Vec<Column>,
    rows: Vec<SampleRow>,
}

impl SampleTable {
    pub fn read_csv(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        Self::from_reader(file).with_context(|| format!("read {}", path.display()))
    }

    /// Parses CSV text. Short rows leave the trailing fields absent.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .context("read header row")?
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut columns = Vec::with_capacity(headers.len());
        let mut extra_count = 0;
        for header in &headers {
            match header.parse::<SampleField>() {
                Ok(field) => {
                    if columns.contains(&Column::Field(field)) {
                        bail!("duplicate column: {header}");
                    }
                    columns.push(Column::Field(field));
                }
                Err(_) => {
                    debug!(column = %header, "passing through unknown column");
                    columns.push(Column::Extra(extra_count));
                    extra_count += 1;
                }
            }
        }

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            // Header is line 1.
            let line = index + 2;
            let record = record.with_context(|| format!("read line {line}"))?;
            if record.len() > columns.len() {
                bail!(
                    "line {line} has {} cells but the header has {}",
                    record.len(),
                    columns.len()
                );
            }
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            let mut row = SampleRow {
                data: SampleData::new(),
                extra: vec![String::new(); extra_count],
            };
            for (column, cell) in columns.iter().zip(record.iter()) {
                match column {
                    Column::Field(field) => {
                        row.data.insert(*field, cell);
                    }
                    Column::Extra(slot) => row.extra[*slot] = cell.to_string(),
                }
            }
            rows.push(row);
        }

        Ok(Self {
            headers,
            columns,
            rows,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Header names that are not sample fields.
    pub fn unknown_columns(&self) -> Vec<&str> {
        self.headers
            .iter()
            .zip(&self.columns)
            .filter(|(_, column)| matches!(column, Column::Extra(_)))
            .map(|(header, _)| header.as_str())
            .collect()
    }

    /// Ids of the engine-relevant fields found in the header.
    pub fn fields(&self) -> Vec<SampleField> {
        self.columns
            .iter()
            .filter_map(|column| match column {
                Column::Field(field) => Some(*field),
                Column::Extra(_) => None,
            })
            .collect()
    }

    pub fn samples(&self) -> Vec<SampleData> {
        self.rows.iter().map(|row| row.data.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Applies the best candidate of every suggestion with at least
    /// `min_code`. Returns the number of changed cells.
    ///
    /// `report` must come from [`samples`](Self::samples) of this table.
    pub fn apply_corrections(&mut self, report: &BatchReport, min_code: CorrectionCode) -> usize {
        let mut applied = 0;
        for (row, corrections) in self.rows.iter_mut().zip(&report.samples) {
            for suggestion in &corrections.suggestions {
                if suggestion.code < min_code {
                    continue;
                }
                if row.data.apply_correction(suggestion) {
                    debug!(
                        field = %suggestion.field,
                        original = redact_value(&suggestion.original),
                        code = %suggestion.code,
                        "applied correction"
                    );
                    applied += 1;
                }
            }
        }
        applied
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        self.to_writer(file)
            .with_context(|| format!("write {}", path.display()))
    }

    /// Writes the table with the original header, filling absent fields
    /// with empty cells.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            let record = self.columns.iter().map(|column| match column {
                Column::Field(field) => row.data.get(*field).unwrap_or(""),
                Column::Extra(slot) => row.extra[*slot].as_str(),
            });
            writer.write_record(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

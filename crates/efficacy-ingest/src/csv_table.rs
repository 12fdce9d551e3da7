//! Delimited-text loading.
//!
//! The loader carries no business logic: it reads a CSV file into a
//! [`TrialTable`], preserving column order and cell content. Header and
//! cells are trimmed and BOM-stripped, fully blank records are skipped,
//! and every data row is padded or truncated to the header width.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use efficacy_model::TrialTable;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a trial table from a CSV file.
///
/// The first non-blank record is the header. An empty file yields an
/// empty table; whether the result satisfies the pipeline schema is the
/// transform's concern, not the loader's.
pub fn read_trials(path: &Path) -> Result<TrialTable> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        records.push(row);
    }

    if records.is_empty() {
        debug!(path = %path.display(), "csv source is empty");
        return Ok(TrialTable::new(Vec::new()));
    }

    let headers: Vec<String> = records[0]
        .iter()
        .map(|value| normalize_header(value))
        .collect();

    let mut table = TrialTable::new(headers);
    for record in records.iter().skip(1) {
        let mut row = Vec::with_capacity(table.column_count());
        for idx in 0..table.column_count() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        table.push_row(row);
    }

    debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "csv table loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_collapse_inner_whitespace() {
        assert_eq!(normalize_header("  Total   Patients "), "Total Patients");
        assert_eq!(normalize_header("\u{feff}STATUS"), "STATUS");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn cells_keep_inner_whitespace() {
        assert_eq!(normalize_cell("  Drug A "), "Drug A");
    }
}

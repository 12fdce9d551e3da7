//! Delimited-text writing.

use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use efficacy_model::TrialTable;

use crate::error::{ReportError, Result};

/// Write a trial table as CSV, preserving column and row order.
///
/// Quoting is whatever the delimiter requires (csv crate default), and
/// the parent directory is created when absent. On failure no attempt is
/// made to keep a partial file.
pub fn write_trials(path: &Path, table: &TrialTable) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| ReportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    writer
        .write_record(&table.columns)
        .map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    for row in &table.rows {
        writer.write_record(row).map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "csv table written"
    );
    Ok(())
}

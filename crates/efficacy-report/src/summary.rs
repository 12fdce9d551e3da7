//! Machine-readable run summary.
//!
//! Written next to the output table so downstream tooling can pick up
//! row and category counts without re-parsing the CSV.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ReportError, Result};

pub const SUMMARY_FILE_NAME: &str = "run_summary.json";

const SUMMARY_SCHEMA: &str = "trial-efficacy-run-summary";
const SUMMARY_SCHEMA_VERSION: u32 = 1;

/// Counters describing one processing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub schema: String,
    pub schema_version: u32,
    pub confidence: f64,
    pub input_rows: usize,
    pub completed_rows: usize,
    pub filtered_rows: usize,
    pub degraded_rows: usize,
    pub high_efficacy: usize,
    pub moderate_efficacy: usize,
    pub low_efficacy: usize,
}

impl RunSummary {
    pub fn new(confidence: f64) -> Self {
        Self {
            schema: SUMMARY_SCHEMA.to_string(),
            schema_version: SUMMARY_SCHEMA_VERSION,
            confidence,
            input_rows: 0,
            completed_rows: 0,
            filtered_rows: 0,
            degraded_rows: 0,
            high_efficacy: 0,
            moderate_efficacy: 0,
            low_efficacy: 0,
        }
    }
}

/// Write the run summary as pretty JSON into `output_dir`.
pub fn write_run_summary(output_dir: &Path, summary: &RunSummary) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = output_dir.join(SUMMARY_FILE_NAME);
    let payload = serde_json::to_string_pretty(summary)?;
    std::fs::write(&path, payload).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "run summary written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_round_trips_through_json() {
        let mut summary = RunSummary::new(0.95);
        summary.input_rows = 10;
        summary.completed_rows = 7;
        summary.filtered_rows = 3;
        summary.high_efficacy = 2;

        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: RunSummary = serde_json::from_str(&json).expect("deserialize summary");

        assert_eq!(round, summary);
        assert_eq!(round.schema, SUMMARY_SCHEMA);
    }
}

//! Column-name normalization and schema checks.

use efficacy_model::{REQUIRED_COLUMNS, STATUS, SUCCESSFUL_OUTCOMES, TOTAL_PATIENTS, TrialTable};

use crate::error::{Result, TransformError};

/// Rewrite every column name to its canonical uppercase form.
///
/// Runs before any other stage so that header casing in the source file
/// never affects matching. Cell content is untouched.
pub fn normalize_columns(table: &TrialTable) -> TrialTable {
    TrialTable {
        columns: table
            .columns
            .iter()
            .map(|column| column.to_uppercase())
            .collect(),
        rows: table.rows.clone(),
    }
}

/// Positions of the three required columns in a normalized table.
#[derive(Debug, Clone, Copy)]
pub struct RequiredColumns {
    pub status: usize,
    pub total_patients: usize,
    pub successful_outcomes: usize,
}

/// Locate the required columns, or report every absence at once.
pub fn required_columns(table: &TrialTable) -> Result<RequiredColumns> {
    let status = table.column_index(STATUS);
    let total_patients = table.column_index(TOTAL_PATIENTS);
    let successful_outcomes = table.column_index(SUCCESSFUL_OUTCOMES);
    if let (Some(status), Some(total_patients), Some(successful_outcomes)) =
        (status, total_patients, successful_outcomes)
    {
        return Ok(RequiredColumns {
            status,
            total_patients,
            successful_outcomes,
        });
    }
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .zip([status, total_patients, successful_outcomes])
        .filter(|(_, index)| index.is_none())
        .map(|(name, _)| (*name).to_string())
        .collect();
    Err(TransformError::MissingColumns { missing })
}

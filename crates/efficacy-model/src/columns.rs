//! Canonical column names for trial tables.
//!
//! Input headers are matched case-insensitively and rewritten to these
//! uppercase names before any other stage runs.

/// Trial status column. Only [`COMPLETED_STATUS`] rows survive filtering.
pub const STATUS: &str = "STATUS";

/// Enrolled patient count, the denominator of the efficacy rate.
pub const TOTAL_PATIENTS: &str = "TOTAL_PATIENTS";

/// Successful outcome count, the numerator of the efficacy rate.
pub const SUCCESSFUL_OUTCOMES: &str = "SUCCESSFUL_OUTCOMES";

/// Status value retained by the filter stage. Matched exactly,
/// case-sensitively, against the cell value.
pub const COMPLETED_STATUS: &str = "Completed";

/// Columns that must be present after header normalization.
pub const REQUIRED_COLUMNS: [&str; 3] = [STATUS, TOTAL_PATIENTS, SUCCESSFUL_OUTCOMES];

/// Derived column: successful outcomes over total patients.
pub const EFFICACY_RATE: &str = "EFFICACY_RATE";

/// Derived column: min-max scaled patient count over the filtered set.
pub const NORMALIZED_PATIENTS: &str = "NORMALIZED_PATIENTS";

/// Derived column: lower bound of the credible interval.
pub const CI_LOWER: &str = "CI_LOWER";

/// Derived column: upper bound of the credible interval.
pub const CI_UPPER: &str = "CI_UPPER";

/// Derived column: categorical efficacy label.
pub const EFFICACY_CATEGORY: &str = "EFFICACY_CATEGORY";

/// Derived columns appended to the output table, in output order.
pub const DERIVED_COLUMNS: [&str; 5] = [
    EFFICACY_RATE,
    NORMALIZED_PATIENTS,
    CI_LOWER,
    CI_UPPER,
    EFFICACY_CATEGORY,
];

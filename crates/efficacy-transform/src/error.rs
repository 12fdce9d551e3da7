use thiserror::Error;

/// Structural failure of the pipeline. Any of these aborts the whole run
/// before an output table exists; per-row numeric edge cases are not
/// errors and degrade in place instead.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },
    #[error("confidence level {value} is outside the open interval (0, 1)")]
    Confidence { value: f64 },
}

pub type Result<T> = std::result::Result<T, TransformError>;

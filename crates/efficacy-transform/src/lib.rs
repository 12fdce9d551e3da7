pub mod error;
pub mod interval;
pub mod pipeline;
pub mod schema;

pub use error::TransformError;
pub use interval::{credible_interval, posterior_params};
pub use pipeline::{
    CategoryCounts, DEFAULT_CONFIDENCE, PipelineOptions, ProcessStats, ProcessedTrials,
    process_trials,
};
pub use schema::{RequiredColumns, normalize_columns, required_columns};

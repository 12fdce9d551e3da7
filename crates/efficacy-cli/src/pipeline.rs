//! Run orchestration: load, transform, write.
//!
//! The stages mirror the data flow in strict order — the loader and
//! writer are the only components touching storage, and the transform in
//! the middle is pure. Each stage logs its counts and duration; the
//! binary's command layer owns the argument parsing and the exit code.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use efficacy_ingest::read_trials;
use efficacy_model::TrialTable;
use efficacy_report::{RunSummary, write_run_summary, write_trials};
use efficacy_transform::{PipelineOptions, ProcessStats, ProcessedTrials, process_trials};

/// Default output file name, written next to the input when no explicit
/// output path is given.
pub const DEFAULT_OUTPUT_NAME: &str = "processed_results.csv";

/// Load the source table from disk.
pub fn load_trials(path: &Path) -> Result<TrialTable> {
    let start = Instant::now();
    let table = read_trials(path).context("load input table")?;
    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        duration_ms = start.elapsed().as_millis(),
        "input loaded"
    );
    Ok(table)
}

/// Run the pure transform over the loaded table.
pub fn transform_trials(table: &TrialTable, confidence: f64) -> Result<ProcessedTrials> {
    let start = Instant::now();
    let options = PipelineOptions::default().with_confidence(confidence);
    let processed = process_trials(table, &options).context("process trials")?;
    info!(
        input_rows = processed.stats.input_rows,
        completed_rows = processed.stats.completed_rows,
        degraded_rows = processed.stats.degraded_rows,
        duration_ms = start.elapsed().as_millis(),
        "trials processed"
    );
    Ok(processed)
}

/// Paths produced by the output stage.
#[derive(Debug)]
pub struct OutputPaths {
    pub table: PathBuf,
    pub summary: Option<PathBuf>,
}

/// Write the enriched table and, unless suppressed, the JSON run summary
/// next to it.
pub fn write_outputs(
    output_path: &Path,
    processed: &ProcessedTrials,
    confidence: f64,
    with_summary: bool,
) -> Result<OutputPaths> {
    let start = Instant::now();
    write_trials(output_path, &processed.table)
        .with_context(|| format!("write {}", output_path.display()))?;
    let summary = if with_summary {
        let summary_dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let summary = build_run_summary(confidence, &processed.stats);
        Some(write_run_summary(summary_dir, &summary).context("write run summary")?)
    } else {
        None
    };
    info!(
        output = %output_path.display(),
        rows = processed.table.row_count(),
        duration_ms = start.elapsed().as_millis(),
        "output written"
    );
    Ok(OutputPaths {
        table: output_path.to_path_buf(),
        summary,
    })
}

/// Default output path: `processed_results.csv` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name(DEFAULT_OUTPUT_NAME)
}

/// Map pipeline counters into the persisted summary document.
pub fn build_run_summary(confidence: f64, stats: &ProcessStats) -> RunSummary {
    let mut summary = RunSummary::new(confidence);
    summary.input_rows = stats.input_rows;
    summary.completed_rows = stats.completed_rows;
    summary.filtered_rows = stats.filtered_rows;
    summary.degraded_rows = stats.degraded_rows;
    summary.high_efficacy = stats.categories.high;
    summary.moderate_efficacy = stats.categories.moderate;
    summary.low_efficacy = stats.categories.low;
    summary
}

//! Trial processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Normalize**: rewrite column names to canonical uppercase
//! 2. **Filter**: keep only rows with a `Completed` status
//! 3. **Rate**: successful outcomes over total patients, per row
//! 4. **Scale**: min-max normalize patient counts over the filtered set
//! 5. **Interval**: Beta-Binomial credible interval, per row
//! 6. **Classify**: map each rate to an efficacy category
//!
//! The whole transform is pure: it reads one table and builds a new one,
//! never touching the input or any file. Rows that cannot produce a
//! defined rate or interval keep their place in the output with sentinel
//! cells; only schema violations abort.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use efficacy_model::{
    COMPLETED_STATUS, DERIVED_COLUMNS, EfficacyCategory, TrialTable, format_optional, parse_i64,
};

use crate::error::{Result, TransformError};
use crate::interval::credible_interval;
use crate::schema::{RequiredColumns, normalize_columns, required_columns};

/// Default two-sided confidence level for the credible interval.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Tunable pipeline parameters. There is exactly one: the confidence
/// level of the credible interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineOptions {
    pub confidence: f64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

impl PipelineOptions {
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}

/// Per-category row counts over the enriched table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
}

impl CategoryCounts {
    pub fn record(&mut self, category: EfficacyCategory) {
        match category {
            EfficacyCategory::High => self.high += 1,
            EfficacyCategory::Moderate => self.moderate += 1,
            EfficacyCategory::Low => self.low += 1,
        }
    }

    pub fn get(&self, category: EfficacyCategory) -> usize {
        match category {
            EfficacyCategory::High => self.high,
            EfficacyCategory::Moderate => self.moderate,
            EfficacyCategory::Low => self.low,
        }
    }
}

/// Counters describing one pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Rows in the input table.
    pub input_rows: usize,
    /// Rows that survived the status filter.
    pub completed_rows: usize,
    /// Rows dropped by the status filter.
    pub filtered_rows: usize,
    /// Surviving rows that received sentinel outputs for rate or interval.
    pub degraded_rows: usize,
    /// Category counts over the surviving rows.
    pub categories: CategoryCounts,
}

/// Result of a pipeline run: the enriched table plus run counters.
#[derive(Debug, Clone)]
pub struct ProcessedTrials {
    pub table: TrialTable,
    pub stats: ProcessStats,
}

/// Patient counts parsed from one surviving row.
#[derive(Debug, Clone, Copy)]
struct TrialCounts {
    total: Option<i64>,
    successes: Option<i64>,
}

/// Run the full pipeline over an in-memory table.
///
/// # Errors
///
/// [`TransformError::Confidence`] when the confidence level is not in
/// `(0, 1)`, and [`TransformError::MissingColumns`] when a required
/// column is absent after name normalization. Neither produces partial
/// output.
pub fn process_trials(table: &TrialTable, options: &PipelineOptions) -> Result<ProcessedTrials> {
    if !(options.confidence > 0.0 && options.confidence < 1.0) {
        return Err(TransformError::Confidence {
            value: options.confidence,
        });
    }

    let normalized = normalize_columns(table);
    let required = required_columns(&normalized)?;

    let survivors = filter_completed(&normalized, required.status);
    debug!(
        input_rows = normalized.row_count(),
        completed_rows = survivors.len(),
        "status filter applied"
    );

    let counts: Vec<TrialCounts> = survivors
        .iter()
        .map(|row| parse_counts(row, required))
        .collect();
    let rates: Vec<Option<f64>> = counts.iter().map(efficacy_rate).collect();
    let scaled = min_max_scale(&counts);
    let intervals: Vec<Option<(f64, f64)>> = counts
        .iter()
        .map(|row| match (row.successes, row.total) {
            (Some(successes), Some(total)) => {
                credible_interval(successes, total, options.confidence)
            }
            _ => None,
        })
        .collect();

    let mut stats = ProcessStats {
        input_rows: normalized.row_count(),
        completed_rows: survivors.len(),
        filtered_rows: normalized.row_count() - survivors.len(),
        ..ProcessStats::default()
    };

    let mut columns = normalized.columns.clone();
    columns.extend(DERIVED_COLUMNS.iter().map(|name| (*name).to_string()));
    let mut output = TrialTable::new(columns);

    for (index, mut row) in survivors.into_iter().enumerate() {
        let rate = rates[index];
        let interval = intervals[index];
        let category = EfficacyCategory::from_rate(rate);
        if rate.is_none() || interval.is_none() {
            stats.degraded_rows += 1;
            warn!(
                row = index,
                total_patients = %counts[index].total.map_or_else(String::new, |v| v.to_string()),
                "undefined efficacy rate or interval; emitting sentinel cells"
            );
        }
        stats.categories.record(category);
        // Tables from the loader are already rectangular; hand-built ones
        // may not be, and derived cells must land in their own columns.
        row.resize(normalized.column_count(), String::new());
        row.push(format_optional(rate));
        row.push(format_optional(scaled[index]));
        row.push(format_optional(interval.map(|bounds| bounds.0)));
        row.push(format_optional(interval.map(|bounds| bounds.1)));
        row.push(category.as_str().to_string());
        output.push_row(row);
    }

    debug!(
        completed_rows = stats.completed_rows,
        degraded_rows = stats.degraded_rows,
        high = stats.categories.high,
        moderate = stats.categories.moderate,
        low = stats.categories.low,
        "enrichment complete"
    );

    Ok(ProcessedTrials {
        table: output,
        stats,
    })
}

/// Keep rows whose status cell is exactly `Completed`. Order preserved.
fn filter_completed(table: &TrialTable, status_index: usize) -> Vec<Vec<String>> {
    table
        .rows
        .iter()
        .filter(|row| {
            row.get(status_index).map(String::as_str) == Some(COMPLETED_STATUS)
        })
        .cloned()
        .collect()
}

fn parse_counts(row: &[String], required: RequiredColumns) -> TrialCounts {
    let cell = |index: usize| row.get(index).map(String::as_str).unwrap_or("");
    TrialCounts {
        total: parse_i64(cell(required.total_patients)),
        successes: parse_i64(cell(required.successful_outcomes)),
    }
}

/// Elementwise efficacy rate. Undefined when the denominator is missing
/// or not positive, or the numerator is missing.
fn efficacy_rate(counts: &TrialCounts) -> Option<f64> {
    match (counts.successes, counts.total) {
        (Some(successes), Some(total)) if total > 0 => Some(successes as f64 / total as f64),
        _ => None,
    }
}

/// Min-max scale the parsed patient counts over the filtered set.
///
/// A degenerate range (every parsed count equal, including a single
/// surviving row) scales to a constant 0 instead of dividing by zero.
/// Rows without a parsed count stay undefined and do not contribute to
/// the range.
fn min_max_scale(counts: &[TrialCounts]) -> Vec<Option<f64>> {
    let parsed: Vec<i64> = counts.iter().filter_map(|row| row.total).collect();
    let min = parsed.iter().copied().min();
    let max = parsed.iter().copied().max();
    counts
        .iter()
        .map(|row| {
            let total = row.total?;
            let (min, max) = (min?, max?);
            if min == max {
                return Some(0.0);
            }
            Some((total - min) as f64 / (max - min) as f64)
        })
        .collect()
}

//! Integration tests for the run orchestration module.

use std::io::Write;
use std::path::Path;

use efficacy_cli::pipeline::{
    DEFAULT_OUTPUT_NAME, build_run_summary, default_output_path, load_trials, transform_trials,
    write_outputs,
};
use efficacy_ingest::read_trials;
use efficacy_report::{RunSummary, SUMMARY_FILE_NAME};
use efficacy_transform::{CategoryCounts, ProcessStats};

fn write_input(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("clinical_trials.csv");
    let mut file = std::fs::File::create(&path).expect("create input");
    file.write_all(
        b"trial_id,drug_name,status,total_patients,successful_outcomes\n\
          T001,Abraxin,Completed,100,85\n\
          T002,Belatro,Ongoing,80,50\n\
          T003,Celestra,Completed,120,61\n\
          T004,Dorvax,Completed,0,0\n",
    )
    .expect("write input");
    path
}

#[test]
fn full_run_writes_enriched_table_and_summary() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_input(dir.path());
    let output = dir.path().join("processed_results.csv");

    let table = load_trials(&input).expect("load");
    let processed = transform_trials(&table, 0.95).expect("transform");
    let paths = write_outputs(&output, &processed, 0.95, true).expect("write");

    let enriched = read_trials(&paths.table).expect("read output");
    assert_eq!(enriched.row_count(), 3);
    assert_eq!(
        enriched.columns,
        vec![
            "TRIAL_ID",
            "DRUG_NAME",
            "STATUS",
            "TOTAL_PATIENTS",
            "SUCCESSFUL_OUTCOMES",
            "EFFICACY_RATE",
            "NORMALIZED_PATIENTS",
            "CI_LOWER",
            "CI_UPPER",
            "EFFICACY_CATEGORY",
        ]
    );
    // The Ongoing trial is gone; the zero-patient trial degrades in place.
    let rate_column = enriched.column_index("EFFICACY_RATE").expect("rate column");
    assert_eq!(enriched.cell(0, rate_column), "0.85");
    assert_eq!(enriched.cell(2, rate_column), "");

    let summary_path = paths.summary.expect("summary written");
    assert_eq!(
        summary_path.file_name().and_then(|name| name.to_str()),
        Some(SUMMARY_FILE_NAME)
    );
    let payload = std::fs::read_to_string(summary_path).expect("read summary");
    let summary: RunSummary = serde_json::from_str(&payload).expect("parse summary");
    assert_eq!(summary.input_rows, 4);
    assert_eq!(summary.completed_rows, 3);
    assert_eq!(summary.filtered_rows, 1);
    assert_eq!(summary.degraded_rows, 1);
    assert_eq!(summary.high_efficacy, 1);
    assert_eq!(summary.moderate_efficacy, 1);
    assert_eq!(summary.low_efficacy, 1);
}

#[test]
fn summary_can_be_suppressed() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_input(dir.path());
    let output = dir.path().join("out/processed_results.csv");

    let table = load_trials(&input).expect("load");
    let processed = transform_trials(&table, 0.95).expect("transform");
    let paths = write_outputs(&output, &processed, 0.95, false).expect("write");

    assert!(paths.summary.is_none());
    assert!(output.exists());
    assert!(!dir.path().join("out").join(SUMMARY_FILE_NAME).exists());
}

#[test]
fn missing_input_fails_with_path_in_message() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("absent.csv");

    let error = load_trials(&missing).expect_err("load should fail");

    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn default_output_sits_next_to_the_input() {
    let path = default_output_path(Path::new("data/clinical_trials.csv"));
    assert_eq!(path, Path::new("data").join(DEFAULT_OUTPUT_NAME));
}

#[test]
fn run_summary_carries_every_counter() {
    let stats = ProcessStats {
        input_rows: 10,
        completed_rows: 6,
        filtered_rows: 4,
        degraded_rows: 2,
        categories: CategoryCounts {
            high: 1,
            moderate: 2,
            low: 3,
        },
    };

    let summary = build_run_summary(0.9, &stats);

    assert_eq!(summary.confidence, 0.9);
    assert_eq!(summary.input_rows, 10);
    assert_eq!(summary.completed_rows, 6);
    assert_eq!(summary.filtered_rows, 4);
    assert_eq!(summary.degraded_rows, 2);
    assert_eq!(summary.high_efficacy, 1);
    assert_eq!(summary.moderate_efficacy, 2);
    assert_eq!(summary.low_efficacy, 3);
}

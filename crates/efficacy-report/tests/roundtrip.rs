//! Write-then-read tests across the persistence boundary.

use efficacy_ingest::read_trials;
use efficacy_model::TrialTable;
use efficacy_report::{RunSummary, SUMMARY_FILE_NAME, write_run_summary, write_trials};

fn enriched_table() -> TrialTable {
    let mut table = TrialTable::new(
        ["TRIAL_ID", "DRUG", "STATUS", "EFFICACY_RATE", "EFFICACY_CATEGORY"]
            .iter()
            .map(|name| (*name).to_string())
            .collect(),
    );
    table.push_row(
        ["T001", "Abraxin, XR", "Completed", "0.85", "High Efficacy"]
            .iter()
            .map(|cell| (*cell).to_string())
            .collect(),
    );
    table.push_row(
        ["T002", "Belatro", "Completed", "", "Low Efficacy"]
            .iter()
            .map(|cell| (*cell).to_string())
            .collect(),
    );
    table
}

#[test]
fn written_table_reads_back_identically() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("processed_results.csv");
    let table = enriched_table();

    write_trials(&path, &table).expect("write table");
    let round = read_trials(&path).expect("read table");

    // Delimiters inside cells and empty sentinel cells both survive.
    assert_eq!(round, table);
}

#[test]
fn writer_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested/output/processed_results.csv");

    write_trials(&path, &enriched_table()).expect("write table");

    assert!(path.exists());
}

#[test]
fn run_summary_lands_next_to_the_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut summary = RunSummary::new(0.95);
    summary.completed_rows = 2;

    let path = write_run_summary(dir.path(), &summary).expect("write summary");

    assert_eq!(path.file_name().and_then(|name| name.to_str()), Some(SUMMARY_FILE_NAME));
    let payload = std::fs::read_to_string(&path).expect("read summary");
    let round: RunSummary = serde_json::from_str(&payload).expect("parse summary");
    assert_eq!(round, summary);
}

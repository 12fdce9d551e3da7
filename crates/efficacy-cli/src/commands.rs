//! Command implementations for the CLI.

use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use efficacy_cli::pipeline::{
    default_output_path, load_trials, transform_trials, write_outputs,
};
use efficacy_model::{
    EfficacyCategory, HIGH_EFFICACY_THRESHOLD, MODERATE_EFFICACY_THRESHOLD,
};

use crate::cli::ProcessArgs;
use crate::summary::apply_table_style;
use crate::types::ProcessResult;

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let process_span = info_span!("process", input = %args.input.display());
    let _process_guard = process_span.enter();

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    let table = load_trials(&args.input)?;
    let processed = transform_trials(&table, args.confidence)?;

    let (output, summary) = if args.dry_run {
        info!("dry run, skipping outputs");
        (None, None)
    } else {
        let paths = write_outputs(&output_path, &processed, args.confidence, !args.no_summary)?;
        (Some(paths.table), paths.summary)
    };

    Ok(ProcessResult {
        input: args.input.clone(),
        output,
        summary,
        confidence: args.confidence,
        stats: processed.stats,
    })
}

pub fn run_categories() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Rate"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        EfficacyCategory::High.as_str().to_string(),
        format!("rate >= {HIGH_EFFICACY_THRESHOLD}"),
    ]);
    table.add_row(vec![
        EfficacyCategory::Moderate.as_str().to_string(),
        format!("{MODERATE_EFFICACY_THRESHOLD} <= rate < {HIGH_EFFICACY_THRESHOLD}"),
    ]);
    table.add_row(vec![
        EfficacyCategory::Low.as_str().to_string(),
        format!("rate < {MODERATE_EFFICACY_THRESHOLD} (and undefined rates)"),
    ]);
    println!("{table}");
    Ok(())
}

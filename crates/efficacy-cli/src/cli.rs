//! CLI argument definitions for the trial efficacy pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use efficacy_transform::DEFAULT_CONFIDENCE;

#[derive(Parser)]
#[command(
    name = "trial-efficacy",
    version,
    about = "Trial Efficacy Pipeline - Assess clinical trial efficacy from tabular records",
    long_about = "Assess per-trial efficacy from tabular clinical-trial records.\n\n\
                  Reads a CSV of trial records, keeps completed trials, derives the\n\
                  efficacy rate, a Bayesian credible interval, and a categorical label,\n\
                  and writes the enriched table back to CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr (falls back to the
    /// LOG_FILE environment variable).
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a trial table and write the enriched output.
    Process(ProcessArgs),

    /// List the efficacy categories and their rate thresholds.
    Categories,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the input CSV of trial records.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: processed_results.csv next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Confidence level for the credible interval, in (0, 1).
    #[arg(long = "confidence", value_name = "LEVEL", default_value_t = DEFAULT_CONFIDENCE)]
    pub confidence: f64,

    /// Validate and transform without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip writing the JSON run summary next to the output table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

use std::path::PathBuf;

use efficacy_transform::ProcessStats;

#[derive(Debug)]
pub struct ProcessResult {
    pub input: PathBuf,
    /// None on a dry run.
    pub output: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub confidence: f64,
    pub stats: ProcessStats,
}

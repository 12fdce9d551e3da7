use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a source table.
///
/// Both variants are fatal for the run; the caller logs the cause and
/// converts it into a non-zero exit.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

//! Error types for the series pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input file could not be opened or read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be decoded into a record.
    #[error("row {line}: {message}")]
    Parse { line: u64, message: String },
}

impl PipelineError {
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        PipelineError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Convert a `csv` error, keeping I/O failures distinct from bad data.
    pub fn from_csv(path: Option<&std::path::Path>, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => PipelineError::Io {
                path: path.map(PathBuf::from).unwrap_or_default(),
                source,
            },
            _ => PipelineError::Parse { line, message },
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, PipelineError::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

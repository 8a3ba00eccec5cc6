// File: crates/report/src/error.rs
// Summary: Error taxonomy for a report run: configuration problems vs processing failures.

use std::path::PathBuf;

use chart_core::RenderError;
use thiserror::Error;

/// Problems with the run's inputs, detected before any row is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("select at least one exam column")]
    NoExamColumns,

    #[error("column '{column}' is not in the table")]
    UnknownColumn { column: String },

    #[error("y-axis bound must be at least 1, got {value}")]
    InvalidUpperBound { value: i64 },

    #[error("no font available: {reason}")]
    MissingFont { reason: String },
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to open table '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row} has {found} cells but the header has {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to start archive entry '{name}': {source}")]
    Entry {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to write archive entry '{name}': {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to finalize archive: {0}")]
    Finish(#[source] zip::result::ZipError),
}

/// How a failure is presented to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Processing,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("configuration error: {0}")]
    Table(#[from] TableError),

    #[error("processing error: {0}")]
    Render(#[from] RenderError),

    #[error("processing error: {0}")]
    Archive(#[from] ArchiveError),
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::Config(_) | ReportError::Table(_) => ErrorKind::Configuration,
            ReportError::Render(_) | ReportError::Archive(_) => ErrorKind::Processing,
        }
    }
}

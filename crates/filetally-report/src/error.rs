//! Rendering errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors writing a report to one of its sinks.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output file could not be created.
    #[error("Cannot create report file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to a sink failed.
    #[error("I/O error writing report: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

//! Error types for the book-data crate.
//!
//! Normalization never fails, so the only errors this crate produces come
//! from writing the CSV export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting book records
#[derive(Error, Debug)]
pub enum BookDataError {
    /// I/O error while creating, writing or renaming the output file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV writer rejected a record
    #[error("Failed to write CSV to {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl BookDataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BookDataError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience Result type for book-data operations
pub type Result<T> = std::result::Result<T, BookDataError>;

//! Top-level error type for a pipeline run.
//!
//! Every failure of a run falls into one of three kinds, each with a
//! category label used when the error is shown to the user.

use book_data::BookDataError;
use catalog_client::CatalogClientError;
use thiserror::Error;

/// Errors that abort a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Network or HTTP failure while fetching the catalog
    #[error(transparent)]
    Transport(CatalogClientError),

    /// The catalog response could not be decoded
    #[error(transparent)]
    Decode(CatalogClientError),

    /// The export file (or the console report) could not be written
    #[error(transparent)]
    Io(#[from] BookDataError),
}

impl PipelineError {
    /// Label shown in front of the error message.
    pub fn category(&self) -> &'static str {
        match self {
            PipelineError::Transport(_) => "Request Error",
            PipelineError::Decode(_) => "Invalid JSON response",
            PipelineError::Io(_) => "File Error",
        }
    }
}

impl From<CatalogClientError> for PipelineError {
    fn from(err: CatalogClientError) -> Self {
        if err.is_transport() {
            PipelineError::Transport(err)
        } else {
            PipelineError::Decode(err)
        }
    }
}

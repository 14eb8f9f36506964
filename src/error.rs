//! Error types for the documentation pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a documentation run.
#[derive(Error, Debug)]
pub enum DocError {
    /// The input path does not exist.
    #[error("input file not found: {0:?}")]
    InputNotFound(PathBuf),

    /// IO errors (reading the input, writing the site)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed XML.
    #[error("XML parsing error at position {position}: {message}")]
    Xml { position: u64, message: String },

    /// Search index serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsing succeeded but no type could be derived from the input.
    #[error("no types found in the XML documentation")]
    NoTypes,
}

/// Result type alias for documentation operations
pub type DocResult<T> = Result<T, DocError>;

impl From<std::io::Error> for DocError {
    fn from(err: std::io::Error) -> Self {
        DocError::Io {
            source: err,
            message: "IO operation failed".to_string(),
        }
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: impl FnOnce() -> String) -> DocResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: impl FnOnce() -> String) -> DocResult<T> {
        self.map_err(|e| DocError::Io {
            message: message(),
            source: e,
        })
    }
}

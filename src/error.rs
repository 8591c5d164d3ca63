//! Error types for corpus scanning

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a mail corpus
#[derive(Error, Debug)]
pub enum ScanError {
    /// A mail document could not be read; aborts the run
    #[error("failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory traversal failed; aborts the run
    #[error("failed to walk corpus directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// An output file could not be written; reported, does not abort
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The statistics export could not be encoded
    #[error("failed to encode statistics: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for corpus scanning operations
pub type Result<T> = std::result::Result<T, ScanError>;

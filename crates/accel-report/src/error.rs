//! Error types for report generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a report run.
///
/// A missing or malformed diff file is not an error; it only turns the
/// owning variant's verdict into `Failed`.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to list directory {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, ReportError>;

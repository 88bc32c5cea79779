//! Error types for hearth filesystem operations.

use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for filesystem operations.
pub type Result<T> = std::result::Result<T, FsError>;

/// Errors that can occur in filesystem and editor operations.
///
/// There is no retry and no rollback anywhere in this crate: the first
/// error an operation hits is handed back verbatim.
#[derive(Debug, Error)]
pub enum FsError {
    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Editor exited with a non-zero status.
    #[error("editor '{editor}' failed: {status}")]
    Editor {
        /// Command the editor was launched as.
        editor: String,
        /// Exit status reported by the child process.
        status: ExitStatus,
    },
}

//! Error types for ignite-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from launcher store and ledger operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure, annotated with the path being touched.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (write path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A launcher record exists but could not be parsed.
    #[error("failed to parse launcher record at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No script or record exists for the launcher.
    #[error("launcher \"{name}\" not found")]
    NotFound { name: String },

    /// A rename target already has a script or record.
    #[error("a launcher named \"{name}\" already exists")]
    Conflict { name: String },

    /// The launcher name cannot be embedded in a file name.
    #[error("invalid launcher name \"{name}\": {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// Convenience constructor for [`StoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.into(),
        source,
    }
}

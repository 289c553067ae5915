//! Error types for ignite-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while building the template set or rendering a launcher.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template parse or render failure (includes user overrides).
    #[error("script template error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while reading template overrides.
    #[error("template override io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

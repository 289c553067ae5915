//! Error types for ignite-launch.

use std::path::PathBuf;

use thiserror::Error;

use ignite_core::StoreError;
use ignite_renderer::RenderError;

use crate::prompt::PromptError;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The launcher script could not be started.
    #[error("failed to start {script}: {source}")]
    Spawn {
        script: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

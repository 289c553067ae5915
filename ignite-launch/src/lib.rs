//! # ignite-launch
//!
//! Interactive half of Ignite: the [`Prompter`] capability, the
//! [`ConfigWizard`] that builds a launcher configuration, and the
//! [`LauncherRunner`] that executes a saved launcher as a detached process.

pub mod error;
pub mod net;
pub mod prompt;
pub mod runner;
pub mod spawn;
pub mod wizard;

pub use error::LaunchError;
pub use prompt::{PromptError, Prompter, Validator};
pub use runner::{LauncherRunner, RunOutcome};
pub use spawn::{Spawner, SystemSpawner};
pub use wizard::ConfigWizard;

//! Ignite core library: launcher types, persistence and errors.
//!
//! Public API surface:
//! - [`types`]: newtypes and domain structs
//! - [`error`]: [`StoreError`]
//! - [`paths`]: configuration / desktop directory resolution
//! - [`probe`]: executable lookup on the search path
//! - [`store`]: launcher script + JSON record persistence
//! - [`recent`]: recently used launchers

pub mod error;
pub mod paths;
pub mod probe;
pub mod recent;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use paths::Paths;
pub use recent::RecentLedger;
pub use store::{LauncherStore, WrittenLauncher};
pub use types::{
    LauncherConfig, LauncherName, LauncherRecord, LauncherScript, Platform, RecentEntry,
};

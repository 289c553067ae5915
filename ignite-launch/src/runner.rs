//! Launcher execution state machine.
//!
//! ```text
//! NotFound ─▶ done
//! ConfigCheck ─▶ StaleTarget ─▶ (confirm) delete ─▶ done
//!            └─▶ Confirm ─▶ (declined) done
//!                       └─▶ Spawn ─▶ RecordRecent ─▶ done
//! ```

use std::path::PathBuf;

use tracing::{info, warn};

use ignite_core::{LauncherName, LauncherStore, RecentEntry, RecentLedger};

use crate::error::LaunchError;
use crate::prompt::Prompter;
use crate::spawn::{Spawner, SystemSpawner};

pub const SECURITY_WARNING: &str = "SECURITY WARNING: you are about to run a launcher script. \
Only continue if you created this launcher. Running untrusted scripts can harm your system.";

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No launcher script for this name.
    NotFound,
    /// The recorded project directory is gone. Nothing was spawned.
    Stale { path: PathBuf, deleted: bool },
    /// The user declined the security confirmation.
    Declined,
    /// The script was started as a detached process.
    Launched { script: PathBuf, pid: u32 },
}

pub struct LauncherRunner<'a, S: Spawner = SystemSpawner> {
    store: &'a LauncherStore,
    ledger: &'a RecentLedger,
    spawner: S,
}

impl<'a> LauncherRunner<'a, SystemSpawner> {
    pub fn new(store: &'a LauncherStore, ledger: &'a RecentLedger) -> Self {
        Self::with_spawner(store, ledger, SystemSpawner)
    }
}

impl<'a, S: Spawner> LauncherRunner<'a, S> {
    pub fn with_spawner(store: &'a LauncherStore, ledger: &'a RecentLedger, spawner: S) -> Self {
        Self {
            store,
            ledger,
            spawner,
        }
    }

    /// Run launcher `name`. `direct` skips the security confirmation.
    ///
    /// A corrupt JSON record is an error. Failing to update the recent
    /// ledger after a successful spawn is logged and ignored.
    pub fn run<P: Prompter + ?Sized>(
        &self,
        name: &LauncherName,
        direct: bool,
        prompter: &mut P,
    ) -> Result<RunOutcome, LaunchError> {
        let script = self.store.script_path(name);
        if !script.is_file() {
            return Ok(RunOutcome::NotFound);
        }

        let record = if self.store.record_path(name).is_file() {
            Some(self.store.load(name)?)
        } else {
            None
        };

        if let Some(record) = record.as_ref().filter(|r| r.is_stale()) {
            let message = format!(
                "Project path no longer exists: {}. Delete this launcher?",
                record.path.display()
            );
            let deleted = if prompter.confirm(&message, true)? {
                let removed = self.store.delete(name)?;
                info!(launcher = %name, files = removed.len(), "stale launcher deleted");
                true
            } else {
                false
            };
            return Ok(RunOutcome::Stale {
                path: record.path.clone(),
                deleted,
            });
        }

        if !direct {
            let message = format!("{SECURITY_WARNING}\nDo you want to continue?");
            if !prompter.confirm(&message, false)? {
                return Ok(RunOutcome::Declined);
            }
        }

        let pid = self
            .spawner
            .spawn_detached(&script)
            .map_err(|source| LaunchError::Spawn {
                script: script.clone(),
                source,
            })?;

        let project = record
            .map(|r| r.path)
            .unwrap_or_else(|| self.store.config_dir().to_path_buf());
        if let Err(e) = self.ledger.add(RecentEntry::launched(name, project)) {
            warn!(launcher = %name, error = %e, "could not record recent launch");
        }

        Ok(RunOutcome::Launched { script, pid })
    }
}

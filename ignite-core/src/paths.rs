//! Per-user directory resolution.
//!
//! ```text
//! ~/.hop-cli/launchers/     configuration directory (created on demand, 0700)
//!   ignite-<name>.<ext>     launcher script
//!   ignite-<name>.json      launcher record
//!   recent.json             recent-projects ledger
//!   templates/              optional script template overrides
//! ~/Desktop/                desktop copies (falls back to the current directory)
//! ```
//!
//! Every function has an explicit-directory form (`_at`) for tests; the
//! convenience wrappers derive directories from `dirs::home_dir()` and the
//! process working directory.

use std::path::{Path, PathBuf};

use crate::error::{io_err, StoreError};

pub const RECENT_FILE: &str = "recent.json";
pub const TEMPLATES_DIR: &str = "templates";

/// `<home>/.hop-cli/launchers`. Pure, no I/O.
pub fn config_dir_path(home: &Path) -> PathBuf {
    home.join(".hop-cli").join("launchers")
}

/// `<home>/.hop-cli/launchers`, created (mode `0700`) if it does not exist.
pub fn config_dir_at(home: &Path) -> Result<PathBuf, StoreError> {
    let dir = config_dir_path(home);
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
        set_dir_permissions(&dir)?;
    }
    Ok(dir)
}

/// `<home>/Desktop` if it exists, otherwise `cwd`.
pub fn desktop_dir_at(home: &Path, cwd: &Path) -> PathBuf {
    let desktop = home.join("Desktop");
    if desktop.is_dir() {
        return desktop;
    }
    tracing::warn!(
        cwd = %cwd.display(),
        "desktop folder not found, using current directory"
    );
    cwd.to_path_buf()
}

/// Resolved directories for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub config_dir: PathBuf,
    pub desktop_dir: PathBuf,
}

impl Paths {
    pub fn resolve_at(home: &Path, cwd: &Path) -> Result<Self, StoreError> {
        Ok(Paths {
            config_dir: config_dir_at(home)?,
            desktop_dir: desktop_dir_at(home, cwd),
        })
    }

    /// `resolve_at` convenience wrapper.
    pub fn resolve() -> Result<Self, StoreError> {
        let cwd = std::env::current_dir().map_err(|e| io_err(".", e))?;
        Self::resolve_at(&home()?, &cwd)
    }

    pub fn recent_file(&self) -> PathBuf {
        self.config_dir.join(RECENT_FILE)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.config_dir.join(TEMPLATES_DIR)
    }
}

pub fn home() -> Result<PathBuf, StoreError> {
    dirs::home_dir().ok_or(StoreError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

//! Launcher store: script and JSON record persistence.
//!
//! # Storage layout
//!
//! ```text
//! <config_dir>/
//!   ignite-<name>.<ext>          launcher script (0755)
//!   ignite-<name>.json           LauncherRecord
//!   ignite-<name>-browser.bat    Windows-only multi-URL opener
//! <desktop_dir>/
//!   ignite-<name>.<ext>          desktop copy of the launcher script
//! ```
//!
//! Nothing is cached: every call reads the directories again.
//!
//! The config-directory copy and the desktop copy are written by two separate
//! calls ([`LauncherStore::write_config_copy`], then
//! [`LauncherStore::write_desktop_copy`]). There is no transaction around
//! them: a failure in between leaves the config copy on disk and the desktop
//! copy missing. Rename has the same property.

use std::path::{Path, PathBuf};

use serde::de::Error as _;

use crate::error::{io_err, StoreError};
use crate::paths::Paths;
use crate::types::{LauncherName, LauncherRecord, LauncherScript, Platform};

/// Where [`LauncherStore::write`] put the two script copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenLauncher {
    pub config_script: PathBuf,
    pub desktop_script: PathBuf,
}

/// Owner of every launcher file on disk.
#[derive(Debug, Clone)]
pub struct LauncherStore {
    config_dir: PathBuf,
    desktop_dir: PathBuf,
    platform: Platform,
}

impl LauncherStore {
    pub fn new(paths: &Paths, platform: Platform) -> Self {
        Self::at(paths.config_dir.clone(), paths.desktop_dir.clone(), platform)
    }

    /// Store over explicit directories; used in tests with `TempDir`.
    pub fn at(config_dir: PathBuf, desktop_dir: PathBuf, platform: Platform) -> Self {
        Self {
            config_dir,
            desktop_dir,
            platform,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn desktop_dir(&self) -> &Path {
        &self.desktop_dir
    }

    // -----------------------------------------------------------------------
    // 1. Path helpers (pure, no I/O)
    // -----------------------------------------------------------------------

    fn script_file_name(&self, name: &LauncherName) -> String {
        format!("{}.{}", name.file_stem(), self.platform.script_extension())
    }

    /// `<config_dir>/ignite-<name>.<ext>`
    pub fn script_path(&self, name: &LauncherName) -> PathBuf {
        self.config_dir.join(self.script_file_name(name))
    }

    /// `<desktop_dir>/ignite-<name>.<ext>`
    pub fn desktop_script_path(&self, name: &LauncherName) -> PathBuf {
        self.desktop_dir.join(self.script_file_name(name))
    }

    /// `<config_dir>/ignite-<name>.json`
    pub fn record_path(&self, name: &LauncherName) -> PathBuf {
        self.config_dir.join(format!("{}.json", name.file_stem()))
    }

    /// `<config_dir>/ignite-<name>-browser.bat`
    pub fn browser_script_path(&self, name: &LauncherName) -> PathBuf {
        self.config_dir.join(name.browser_script_file_name())
    }

    /// True when either script copy is present.
    pub fn exists(&self, name: &LauncherName) -> bool {
        self.script_path(name).exists() || self.desktop_script_path(name).exists()
    }

    // -----------------------------------------------------------------------
    // 2. Write
    // -----------------------------------------------------------------------

    /// Write the config-directory copy, then the desktop copy.
    ///
    /// Stops at the first failure; files written before it stay on disk.
    pub fn write(
        &self,
        record: &LauncherRecord,
        script: &LauncherScript,
    ) -> Result<WrittenLauncher, StoreError> {
        let config_script = self.write_config_copy(record, script)?;
        let desktop_script = self.write_desktop_copy(&record.name, script)?;
        Ok(WrittenLauncher {
            config_script,
            desktop_script,
        })
    }

    /// Write the JSON record, the auxiliary browser script (if any) and the
    /// launcher script into the configuration directory.
    pub fn write_config_copy(
        &self,
        record: &LauncherRecord,
        script: &LauncherScript,
    ) -> Result<PathBuf, StoreError> {
        let name = &record.name;
        write_json_atomic(&self.record_path(name), record)?;

        if let Some(browser) = &script.browser_script {
            write_script(&self.browser_script_path(name), browser)?;
        }

        let path = self
            .config_dir
            .join(format!("{}.{}", name.file_stem(), script.extension));
        write_script(&path, &script.content)?;
        tracing::info!(launcher = %name, path = %path.display(), "wrote launcher script");
        Ok(path)
    }

    /// Write the desktop copy of the launcher script.
    pub fn write_desktop_copy(
        &self,
        name: &LauncherName,
        script: &LauncherScript,
    ) -> Result<PathBuf, StoreError> {
        let path = self
            .desktop_dir
            .join(format!("{}.{}", name.file_stem(), script.extension));
        write_script(&path, &script.content)?;
        tracing::info!(launcher = %name, path = %path.display(), "wrote desktop copy");
        Ok(path)
    }

    // -----------------------------------------------------------------------
    // 3. Load / list
    // -----------------------------------------------------------------------

    /// Load one record.
    ///
    /// Returns `StoreError::NotFound` if the JSON is absent and
    /// `StoreError::Parse` if it is malformed.
    pub fn load(&self, name: &LauncherName) -> Result<LauncherRecord, StoreError> {
        let path = self.record_path(name);
        if !path.exists() {
            return Err(StoreError::NotFound {
                name: name.0.clone(),
            });
        }
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        serde_json::from_str(&contents).map_err(|e| StoreError::Parse { path, source: e })
    }

    /// Every well-formed record in the configuration directory, sorted by name.
    ///
    /// Files that are not valid JSON or do not have the record shape are
    /// skipped without error.
    pub fn list(&self) -> Result<Vec<LauncherRecord>, StoreError> {
        if !self.config_dir.exists() {
            return Ok(vec![]);
        }
        let mut entries: Vec<_> = std::fs::read_dir(&self.config_dir)
            .map_err(|e| io_err(&self.config_dir, e))?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("json"))
            .collect();
        entries.sort_by_key(|e| e.file_name());

        let mut records = Vec::new();
        for entry in entries {
            let path = entry.path();
            let parsed = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|s| {
                    serde_json::from_str::<LauncherRecord>(&s).map_err(|e| e.to_string())
                });
            match parsed {
                Ok(record) => records.push(record),
                Err(reason) => {
                    tracing::debug!(path = %path.display(), %reason, "skipping malformed launcher record");
                }
            }
        }
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    // -----------------------------------------------------------------------
    // 4. Delete
    // -----------------------------------------------------------------------

    /// Remove every file belonging to `name`. Missing files are not an error.
    ///
    /// Returns the paths that were actually removed.
    pub fn delete(&self, name: &LauncherName) -> Result<Vec<PathBuf>, StoreError> {
        let candidates = [
            self.script_path(name),
            self.record_path(name),
            self.browser_script_path(name),
            self.desktop_script_path(name),
        ];
        let mut removed = Vec::new();
        for path in candidates {
            if path.exists() {
                std::fs::remove_file(&path).map_err(|e| io_err(&path, e))?;
                removed.push(path);
            }
        }
        tracing::info!(launcher = %name, removed = removed.len(), "deleted launcher");
        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // 5. Rename
    // -----------------------------------------------------------------------

    /// Rename a launcher. Never overwrites an existing launcher.
    ///
    /// The record is read and rewritten with the new `name`; all other fields
    /// are kept as they were on disk.
    pub fn rename(&self, old: &LauncherName, new: &LauncherName) -> Result<(), StoreError> {
        let old_script = self.script_path(old);
        let old_record = self.record_path(old);
        if !old_script.exists() && !old_record.exists() {
            return Err(StoreError::NotFound { name: old.0.clone() });
        }

        let new_script = self.script_path(new);
        let new_record = self.record_path(new);
        if new_script.exists() || new_record.exists() {
            return Err(StoreError::Conflict { name: new.0.clone() });
        }

        // Parse before moving anything so a corrupt record aborts cleanly.
        let rewritten = if old_record.exists() {
            let contents =
                std::fs::read_to_string(&old_record).map_err(|e| io_err(&old_record, e))?;
            let mut value: serde_json::Value = serde_json::from_str(&contents).map_err(|e| {
                StoreError::Parse {
                    path: old_record.clone(),
                    source: e,
                }
            })?;
            let Some(object) = value.as_object_mut() else {
                return Err(StoreError::Parse {
                    path: old_record,
                    source: serde_json::Error::custom("launcher record is not a JSON object"),
                });
            };
            object.insert("name".to_string(), serde_json::Value::String(new.0.clone()));
            Some(value)
        } else {
            None
        };

        if old_script.exists() {
            std::fs::rename(&old_script, &new_script).map_err(|e| io_err(&new_script, e))?;
        }
        if let Some(value) = rewritten {
            write_json_atomic(&new_record, &value)?;
            std::fs::remove_file(&old_record).map_err(|e| io_err(&old_record, e))?;
        }

        let old_desktop = self.desktop_script_path(old);
        if old_desktop.exists() {
            let new_desktop = self.desktop_script_path(new);
            std::fs::rename(&old_desktop, &new_desktop).map_err(|e| io_err(&new_desktop, e))?;
        }

        tracing::info!(from = %old, to = %new, "renamed launcher");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Serialize → `<file>.tmp` sibling → `rename`.
pub(crate) fn write_json_atomic<T: serde::Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = tmp_sibling(path);
    std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_script(path: &Path, content: &str) -> Result<(), StoreError> {
    std::fs::write(path, content).map_err(|e| io_err(path, e))?;
    set_script_permissions(path)
}

#[cfg(unix)]
fn set_script_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_script_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LauncherConfig;
    use tempfile::TempDir;

    fn make_store(platform: Platform) -> (TempDir, TempDir, LauncherStore) {
        let config = TempDir::new().expect("config tempdir");
        let desktop = TempDir::new().expect("desktop tempdir");
        let store = LauncherStore::at(
            config.path().to_path_buf(),
            desktop.path().to_path_buf(),
            platform,
        );
        (config, desktop, store)
    }

    fn script(ext: &str) -> LauncherScript {
        LauncherScript {
            content: "#!/bin/bash\nexit 0\n".to_string(),
            extension: ext.to_string(),
            browser_script: None,
        }
    }

    #[test]
    fn file_names_follow_layout() {
        let (_c, _d, store) = make_store(Platform::MacOs);
        let name = LauncherName::from("demo");
        assert!(store.script_path(&name).ends_with("ignite-demo.command"));
        assert!(store.record_path(&name).ends_with("ignite-demo.json"));
        assert!(store
            .browser_script_path(&name)
            .ends_with("ignite-demo-browser.bat"));
        assert!(store
            .desktop_script_path(&name)
            .starts_with(store.desktop_dir()));
    }

    #[test]
    fn write_leaves_no_tmp_and_marks_executable() {
        let (_c, _d, store) = make_store(Platform::Linux);
        let record = LauncherRecord::new(
            LauncherName::from("demo"),
            PathBuf::from("/code/demo"),
            LauncherConfig::default(),
        );
        let written = store.write(&record, &script("sh")).expect("write");
        assert!(written.config_script.exists());
        assert!(written.desktop_script.exists());
        assert!(!tmp_sibling(&store.record_path(&record.name)).exists());
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&written.config_script)
                .unwrap()
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o755);
        }
    }

    #[test]
    fn browser_script_written_beside_config_copy() {
        let (_c, _d, store) = make_store(Platform::Windows);
        let record = LauncherRecord::new(
            LauncherName::from("web"),
            PathBuf::from("C:\\code\\web"),
            LauncherConfig::default(),
        );
        let mut s = script("bat");
        s.browser_script = Some("@echo off\nexit\n".to_string());
        store.write(&record, &s).expect("write");
        let aux = store.browser_script_path(&record.name);
        assert_eq!(std::fs::read_to_string(aux).unwrap(), "@echo off\nexit\n");
    }

    #[test]
    fn load_missing_returns_not_found() {
        let (_c, _d, store) = make_store(Platform::Linux);
        let err = store.load(&LauncherName::from("nope")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn list_empty_when_config_dir_missing() {
        let store = LauncherStore::at(
            PathBuf::from("/definitely/not/here"),
            PathBuf::from("/definitely/not/here"),
            Platform::Linux,
        );
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn tmp_sibling_appends_suffix() {
        let tmp = tmp_sibling(Path::new("/x/ignite-demo.json"));
        assert_eq!(tmp, PathBuf::from("/x/ignite-demo.json.tmp"));
    }
}

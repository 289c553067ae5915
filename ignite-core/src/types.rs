//! Domain types for Ignite launchers.
//!
//! All path fields use `PathBuf`. Persisted types serialize with camelCase
//! field names so records stay readable by hand.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed launcher name. Embedded in every launcher file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LauncherName(pub String);

impl LauncherName {
    /// Trim and validate user input.
    ///
    /// Rejects empty names and names containing path separators.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let trimmed = raw.trim();
        if let Err(reason) = check_name(trimmed) {
            return Err(StoreError::InvalidName {
                name: raw.to_owned(),
                reason,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shared stem `ignite-<name>` of every file belonging to this launcher.
    pub fn file_stem(&self) -> String {
        format!("ignite-{}", self.0)
    }

    /// `ignite-<name>-browser.bat`, the Windows multi-URL opener.
    pub fn browser_script_file_name(&self) -> String {
        format!("{}-browser.bat", self.file_stem())
    }
}

/// Validation shared by [`LauncherName::parse`] and interactive prompts.
pub fn check_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("launcher name cannot be empty");
    }
    if name.contains('/') || name.contains('\\') {
        return Err("launcher name cannot contain path separators");
    }
    Ok(())
}

impl fmt::Display for LauncherName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for LauncherName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LauncherName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Target platform family for generated scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Batch scripts run by `cmd.exe`.
    Windows,
    /// POSIX shell with Finder / Terminal.app integration.
    MacOs,
    /// Generic POSIX shell with a terminal-emulator fallback chain.
    Linux,
}

impl Platform {
    /// Platform of the running binary. Anything that is neither Windows nor
    /// macOS gets the generic POSIX treatment.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    pub fn all() -> &'static [Platform] {
        &[Platform::Windows, Platform::MacOs, Platform::Linux]
    }

    /// Launcher script extension, without the leading dot.
    pub fn script_extension(&self) -> &'static str {
        match self {
            Platform::Windows => "bat",
            Platform::MacOs => "command",
            Platform::Linux => "sh",
        }
    }

    /// Suggested browser command for the interactive wizard.
    pub fn default_browser_command(&self) -> &'static str {
        match self {
            Platform::Windows => "start chrome",
            Platform::MacOs => "open -a 'Google Chrome'",
            Platform::Linux => "google-chrome",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::MacOs => write!(f, "macos"),
            Platform::Linux => write!(f, "linux"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// What a launcher does when it runs.
///
/// `browser_urls` is only meaningful when `browser` is set, and
/// `browser_delay` only when there is at least one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherConfig {
    #[serde(default)]
    pub folder: bool,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub editor: Option<String>,
    #[serde(default)]
    pub browser: Option<String>,
    #[serde(default)]
    pub browser_urls: Vec<String>,
    /// Seconds to wait before the first URL is opened.
    #[serde(default)]
    pub browser_delay: u32,
}

impl LauncherConfig {
    /// Folder reveal only.
    pub fn folder_only() -> Self {
        Self {
            folder: true,
            command: None,
            editor: None,
            ..Self::default()
        }
    }

    /// Dev command only.
    pub fn command_only(command: impl Into<String>) -> Self {
        Self {
            folder: false,
            command: Some(command.into()),
            editor: None,
            ..Self::default()
        }
    }

    /// True when the generated script has a browser step.
    pub fn opens_browser(&self) -> bool {
        self.browser.is_some() && !self.browser_urls.is_empty()
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            folder: true,
            command: Some("npm run dev".to_string()),
            editor: Some("code".to_string()),
            browser: None,
            browser_urls: Vec::new(),
            browser_delay: 3,
        }
    }
}

/// The persisted unit: one JSON document per launcher name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherRecord {
    pub name: LauncherName,
    /// Absolute path of the project at creation time.
    pub path: PathBuf,
    pub config: LauncherConfig,
    pub created_at: DateTime<Utc>,
}

impl LauncherRecord {
    pub fn new(name: LauncherName, path: PathBuf, config: LauncherConfig) -> Self {
        Self {
            name,
            path,
            config,
            created_at: Utc::now(),
        }
    }

    /// Stale when the recorded project directory is gone.
    pub fn is_stale(&self) -> bool {
        !self.path.exists()
    }
}

/// Generated script text. Derived from a record; never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherScript {
    pub content: String,
    /// Without the leading dot.
    pub extension: String,
    /// Windows-only multi-URL opener, written next to the main script.
    pub browser_script: Option<String>,
}

/// One row of the recent-projects ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEntry {
    pub name: String,
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launched_at: Option<DateTime<Utc>>,
}

impl RecentEntry {
    pub fn created(name: &LauncherName, path: PathBuf) -> Self {
        Self {
            name: name.0.clone(),
            path,
            created_at: Some(Utc::now()),
            launched_at: None,
        }
    }

    /// Keyed by project path, so a launch replaces the create entry for the
    /// same project.
    pub fn launched(name: &LauncherName, path: PathBuf) -> Self {
        Self {
            name: name.0.clone(),
            path,
            created_at: None,
            launched_at: Some(Utc::now()),
        }
    }

    /// Whichever timestamp is set.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.launched_at.or(self.created_at)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

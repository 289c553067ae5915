//! Per-invocation handles on the launcher directories.

use anyhow::{Context, Result};

use ignite_core::{LauncherName, LauncherStore, Paths, Platform, RecentLedger};
use ignite_launch::LauncherRunner;
use ignite_renderer::ScriptGenerator;

pub struct Workspace {
    pub paths: Paths,
    pub platform: Platform,
    pub store: LauncherStore,
    pub ledger: RecentLedger,
}

impl Workspace {
    /// Resolve `~/.hop-cli/launchers` (creating it) and the desktop folder.
    pub fn open() -> Result<Self> {
        let paths = Paths::resolve().context("failed to prepare the launcher directory")?;
        let platform = Platform::current();
        Ok(Workspace {
            store: LauncherStore::new(&paths, platform),
            ledger: RecentLedger::in_dir(&paths.config_dir),
            paths,
            platform,
        })
    }

    /// Generator using embedded templates plus `<config>/templates/` overrides.
    pub fn generator(&self) -> Result<ScriptGenerator> {
        let dir = self.paths.templates_dir();
        ScriptGenerator::with_overrides(&dir)
            .with_context(|| format!("failed to load script templates from {}", dir.display()))
    }

    pub fn runner(&self) -> LauncherRunner<'_> {
        LauncherRunner::new(&self.store, &self.ledger)
    }
}

pub fn parse_name(raw: &str) -> Result<LauncherName> {
    Ok(LauncherName::parse(raw)?)
}

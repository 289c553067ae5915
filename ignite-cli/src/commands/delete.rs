//! `ignite delete [NAMES...]`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use ignite_core::{LauncherName, LauncherRecord};
use ignite_launch::Prompter;

use crate::prompt::TerminalPrompter;
use crate::workspace::{parse_name, Workspace};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Launchers to delete. Without names, choose from a list.
    pub names: Vec<String>,
}

impl DeleteArgs {
    pub fn run(self) -> Result<()> {
        let ws = Workspace::open()?;
        if self.names.is_empty() {
            return interactive(&ws);
        }
        let names = self
            .names
            .iter()
            .map(|n| parse_name(n))
            .collect::<Result<Vec<_>>>()?;
        delete_all(&ws, &names)
    }
}

/// Multi-select over saved launchers, then confirm.
pub fn interactive(ws: &Workspace) -> Result<()> {
    let records = ws.store.list().context("failed to read saved launchers")?;
    if records.is_empty() {
        println!("No launchers to delete.");
        return Ok(());
    }

    let items: Vec<String> = records.iter().map(choice_label).collect();
    let defaults = vec![false; items.len()];

    let mut prompter = TerminalPrompter::default();
    let picked = prompter.multi_select("Select launchers to delete:", &items, &defaults)?;
    if picked.is_empty() {
        println!("{}", "Nothing selected.".bright_black());
        return Ok(());
    }

    let names: Vec<LauncherName> = picked.iter().map(|&i| records[i].name.clone()).collect();
    let listed = names
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if !prompter.confirm(&format!("Delete {listed}?"), false)? {
        println!("{}", "Aborted. Nothing deleted.".bright_black());
        return Ok(());
    }
    delete_all(ws, &names)
}

/// `name [(path missing)] - <path> - Created: <date>`
fn choice_label(record: &LauncherRecord) -> String {
    let missing = if record.is_stale() { " (path missing)" } else { "" };
    format!(
        "{}{missing} - {} - Created: {}",
        record.name,
        record.path.display(),
        record.created_at.format("%Y-%m-%d")
    )
}

fn delete_all(ws: &Workspace, names: &[LauncherName]) -> Result<()> {
    for name in names {
        let removed = ws
            .store
            .delete(name)
            .with_context(|| format!("failed to delete launcher \"{name}\""))?;
        if removed.is_empty() {
            println!("{}", format!("Nothing to delete for {name}.").bright_black());
        } else {
            println!("{}", format!("Deleted {name} ({} files).", removed.len()).green());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ignite_core::LauncherConfig;

    fn record(path: std::path::PathBuf) -> LauncherRecord {
        LauncherRecord {
            name: LauncherName::from("web"),
            path,
            config: LauncherConfig::default(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap(),
        }
    }

    #[test]
    fn label_shows_path_and_creation_date() {
        let dir = tempfile::TempDir::new().unwrap();
        let label = choice_label(&record(dir.path().to_path_buf()));
        assert_eq!(
            label,
            format!("web - {} - Created: 2026-03-04", dir.path().display())
        );
    }

    #[test]
    fn label_marks_missing_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let gone = dir.path().join("gone");
        let label = choice_label(&record(gone.clone()));
        assert_eq!(
            label,
            format!("web (path missing) - {} - Created: 2026-03-04", gone.display())
        );
    }
}

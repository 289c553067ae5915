//! `ignite recent`

use anyhow::Result;
use colored::Colorize;

use ignite_core::RecentEntry;
use ignite_launch::Prompter;

use crate::commands::run::launch;
use crate::prompt::TerminalPrompter;
use crate::workspace::{parse_name, Workspace};

pub fn run() -> Result<()> {
    let ws = Workspace::open()?;
    let entries = ws.ledger.list();
    if entries.is_empty() {
        println!("No recent projects.");
        return Ok(());
    }

    let items: Vec<String> = entries.iter().map(describe).collect();
    let mut prompter = TerminalPrompter::default();
    let picked = prompter.select("Open a recent project:", &items, 0)?;
    let name = parse_name(&entries[picked].name)?;
    launch(&ws, &name, false)
}

fn describe(entry: &RecentEntry) -> String {
    let when = entry
        .timestamp()
        .map(|t| t.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    format!(
        "{}  {}  {}",
        entry.name,
        entry.path.display().to_string().bright_black(),
        when.bright_black()
    )
}

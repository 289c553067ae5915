//! `ignite list [--json]`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use ignite_core::LauncherRecord;

use crate::workspace::Workspace;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LauncherJson {
    name: String,
    path: String,
    status: &'static str,
    created_at: String,
}

#[derive(Tabled)]
struct LauncherRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "path")]
    path: String,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "created")]
    created: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let ws = Workspace::open()?;
        let records = ws.store.list().context("failed to read saved launchers")?;

        if self.json {
            print_json(&records)?;
            return Ok(());
        }
        print_table(&records);
        Ok(())
    }
}

fn status_key(record: &LauncherRecord) -> &'static str {
    if record.is_stale() {
        "path missing"
    } else {
        "ok"
    }
}

fn print_json(records: &[LauncherRecord]) -> Result<()> {
    let payload: Vec<LauncherJson> = records
        .iter()
        .map(|r| LauncherJson {
            name: r.name.0.clone(),
            path: r.path.display().to_string(),
            status: status_key(r),
            created_at: r.created_at.to_rfc3339(),
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize launcher list")?
    );
    Ok(())
}

fn print_table(records: &[LauncherRecord]) {
    if records.is_empty() {
        println!("No launchers saved.");
        println!("Run: ignite create");
        return;
    }

    let rows: Vec<LauncherRow> = records
        .iter()
        .map(|r| LauncherRow {
            name: r.name.0.clone(),
            path: r.path.display().to_string(),
            status: match status_key(r) {
                "ok" => "ok".green().to_string(),
                other => other.red().to_string(),
            },
            created: r.created_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

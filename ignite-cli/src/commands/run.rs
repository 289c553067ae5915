//! `ignite run <name> [--direct]`

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use ignite_core::LauncherName;
use ignite_launch::RunOutcome;

use crate::prompt::TerminalPrompter;
use crate::workspace::{parse_name, Workspace};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Launcher name.
    pub name: String,

    /// Skip the security confirmation.
    #[arg(long)]
    pub direct: bool,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let ws = Workspace::open()?;
        let name = parse_name(&self.name)?;
        launch(&ws, &name, self.direct)
    }
}

/// Run `name` and report the outcome. Shared with `create` and `recent`.
pub fn launch(ws: &Workspace, name: &LauncherName, direct: bool) -> Result<()> {
    let mut prompter = TerminalPrompter::default();
    let outcome = ws
        .runner()
        .run(name, direct, &mut prompter)
        .with_context(|| format!("failed to run launcher \"{name}\""))?;

    match outcome {
        RunOutcome::NotFound => {
            bail!("launcher \"{name}\" not found. Run `ignite create` to make one.")
        }
        RunOutcome::Stale { path, deleted } => {
            println!(
                "{}",
                format!("Project path no longer exists: {}", path.display()).yellow()
            );
            if deleted {
                println!("{}", "Launcher deleted.".green());
            } else {
                println!("{}", "Launcher kept.".bright_black());
            }
        }
        RunOutcome::Declined => {
            println!("{}", "Launcher not executed.".bright_black());
            println!(
                "{}",
                format!("Tip: use `ignite run {name} --direct` to skip the warning.").bright_black()
            );
        }
        RunOutcome::Launched { .. } => {
            println!("{}", format!("Launching {name}...").cyan());
            println!("{}", "Launcher started.".green());
        }
    }
    Ok(())
}

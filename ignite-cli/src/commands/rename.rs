//! `ignite rename <old> <new>`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::workspace::{parse_name, Workspace};

#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Current launcher name.
    pub old: String,

    /// New launcher name.
    pub new: String,
}

impl RenameArgs {
    pub fn run(self) -> Result<()> {
        let ws = Workspace::open()?;
        let old = parse_name(&self.old)?;
        let new = parse_name(&self.new)?;
        ws.store
            .rename(&old, &new)
            .with_context(|| format!("failed to rename \"{old}\" to \"{new}\""))?;
        println!("{}", format!("Renamed {old} -> {new}").green());
        Ok(())
    }
}

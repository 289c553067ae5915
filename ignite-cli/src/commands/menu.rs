//! `ignite` with no subcommand.

use anyhow::Result;

use ignite_launch::Prompter;

use crate::commands::{create::CreateArgs, delete};
use crate::prompt::TerminalPrompter;
use crate::workspace::Workspace;

pub fn run() -> Result<()> {
    let items = vec!["Create launcher".to_string(), "Delete launchers".to_string()];
    let choice = TerminalPrompter::default().select("What would you like to do?", &items, 0)?;
    match choice {
        0 => CreateArgs::default().run(),
        _ => delete::interactive(&Workspace::open()?),
    }
}

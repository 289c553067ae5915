//! `ignite create [--name N] [--quick] [--dry] [--preset full|peek|spark]`

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use dialoguer::console::Term;
use tracing::warn;

use ignite_core::types::check_name;
use ignite_core::{LauncherConfig, LauncherName, LauncherRecord, RecentEntry};
use ignite_launch::{ConfigWizard, Prompter};

use crate::commands::run::launch;
use crate::prompt::TerminalPrompter;
use crate::workspace::{parse_name, Workspace};

/// Ready-made configurations that skip the wizard.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Folder, `npm run dev` and `code`.
    Full,
    /// Open the folder only.
    Peek,
    /// Run `npm run dev` only.
    Spark,
}

impl Preset {
    fn config(self) -> LauncherConfig {
        match self {
            Preset::Full => LauncherConfig::default(),
            Preset::Peek => LauncherConfig::folder_only(),
            Preset::Spark => LauncherConfig::command_only("npm run dev"),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Launcher name. Prompted for (defaulting to the folder name) when omitted.
    #[arg(long)]
    pub name: Option<String>,

    /// Skip the wizard and confirmations; use the default configuration.
    #[arg(long)]
    pub quick: bool,

    /// Print the generated script instead of saving it.
    #[arg(long)]
    pub dry: bool,

    /// Use a preset configuration instead of the wizard.
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,
}

impl CreateArgs {
    pub fn run(self) -> Result<()> {
        let ws = Workspace::open()?;
        let cwd = std::env::current_dir().context("failed to read the current directory")?;
        let folder = cwd
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string());
        let mut prompter = TerminalPrompter::default();

        println!(
            "{}",
            format!("Creating launcher for: {}", folder.white()).cyan().bold()
        );

        let name = match &self.name {
            Some(raw) => parse_name(raw)?,
            None => ask_name(&mut prompter, &folder)?,
        };

        if ws.store.exists(&name) && !self.quick {
            let message = format!("A launcher named \"{name}\" already exists. Overwrite it?");
            if !prompter.confirm(&message, false)? {
                println!("{}", "Aborted. Launcher not changed.".bright_black());
                return Ok(());
            }
        }

        let config = match (self.preset, self.quick) {
            (Some(preset), _) => preset.config(),
            (None, true) => LauncherConfig::default(),
            (None, false) => ConfigWizard::new(&mut prompter, ws.platform)
                .run()
                .context("launcher setup was interrupted")?,
        };

        if !self.quick {
            print_summary(&name, &config);
            if !prompter.confirm("Save this launcher?", true)? {
                println!("{}", "Canceled. Launcher not saved.".bright_black());
                return Ok(());
            }
        }

        let script = ws
            .generator()?
            .generate(&config, &cwd, &name, ws.platform, &ws.paths.config_dir)
            .context("failed to generate launcher script")?;

        if self.dry {
            let rule = "-".repeat(50);
            println!("{}", "Dry run: script preview".bold());
            println!("{}.{}", name.file_stem(), script.extension);
            println!("{rule}");
            print!("{}", script.content);
            println!("{rule}");
            return Ok(());
        }

        let record = LauncherRecord::new(name.clone(), cwd.clone(), config);
        let written = ws
            .store
            .write(&record, &script)
            .with_context(|| format!("failed to save launcher \"{name}\""))?;
        if let Err(e) = ws.ledger.add(RecentEntry::created(&name, cwd)) {
            warn!(launcher = %name, error = %e, "could not record recent project");
        }

        println!("{}", "Launcher created successfully!".green().bold());
        print_location(&written.config_script);
        print_location(&written.desktop_script);
        println!("Run with: {}", format!("ignite run {name}").cyan());

        if Term::stdout().is_term() && prompter.confirm("Run this launcher now?", false)? {
            launch(&ws, &name, true)?;
        }
        Ok(())
    }
}

fn ask_name(prompter: &mut TerminalPrompter, folder: &str) -> Result<LauncherName> {
    let validate = |s: &str| check_name(s).map_err(str::to_string);
    let raw = prompter.input(
        "What should this launcher be called?",
        Some(folder),
        Some(&validate),
    )?;
    parse_name(&raw)
}

fn print_summary(name: &LauncherName, config: &LauncherConfig) {
    let none = || "none".to_string();
    let rule = "-".repeat(34).bright_black();
    println!("{}", "Final Summary".bold());
    println!("{rule}");
    println!("Name: {name}");
    println!("Open Folder: {}", config.folder);
    println!("Command: {}", config.command.clone().unwrap_or_else(none));
    println!("Editor: {}", config.editor.clone().unwrap_or_else(none));
    println!("Browser: {}", config.browser.clone().unwrap_or_else(none));
    let urls = if config.browser_urls.is_empty() {
        none()
    } else {
        config.browser_urls.join(", ")
    };
    println!("URLs: {urls}");
    println!("Delay: {}s", config.browser_delay);
    println!("{rule}");
}

fn print_location(path: &Path) {
    println!("  {}", path.display().to_string().bright_black());
}

//! Ignite: one-click project launchers.
//!
//! # Usage
//!
//! ```text
//! ignite                                    interactive menu (create / delete)
//! ignite create [--name N] [--quick] [--dry] [--preset full|peek|spark]
//! ignite run <name> [--direct]
//! ignite list [--json]
//! ignite recent
//! ignite rename <old> <new>
//! ignite delete [NAMES...]
//! ```

mod commands;
mod prompt;
mod workspace;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, list::ListArgs, rename::RenameArgs, run::RunArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "ignite",
    version,
    about = "Create and run one-click project launchers",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a launcher for the current directory.
    Create(CreateArgs),

    /// Run a saved launcher.
    Run(RunArgs),

    /// List saved launchers.
    List(ListArgs),

    /// Pick a recently used project and launch it.
    Recent,

    /// Rename a launcher.
    Rename(RenameArgs),

    /// Delete one or more launchers.
    Delete(DeleteArgs),
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Human-readable logs on stderr; `RUST_LOG` overrides the `warn` default.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        None => commands::menu::run(),
        Some(Commands::Create(args)) => args.run(),
        Some(Commands::Run(args)) => args.run(),
        Some(Commands::List(args)) => args.run(),
        Some(Commands::Recent) => commands::recent::run(),
        Some(Commands::Rename(args)) => args.run(),
        Some(Commands::Delete(args)) => args.run(),
    }
}

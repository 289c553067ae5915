//! Detached execution of launcher scripts.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::info;

/// Starts a launcher script and returns without waiting for it.
pub trait Spawner {
    /// Returns the child's process id.
    fn spawn_detached(&self, script: &Path) -> std::io::Result<u32>;
}

/// Runs scripts through the platform shell: `cmd.exe /c` on Windows,
/// `/bin/bash` elsewhere.
///
/// The child gets null stdio and its own process group, so it outlives the
/// CLI and never writes to its terminal. The `Child` handle is dropped, not
/// waited on.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn_detached(&self, script: &Path) -> std::io::Result<u32> {
        let mut cmd = shell_command(script);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        detach(&mut cmd);

        let child = cmd.spawn()?;
        let pid = child.id();
        info!(pid, script = %script.display(), "launcher started");
        Ok(pid)
    }
}

#[cfg(windows)]
fn shell_command(script: &Path) -> Command {
    let mut cmd = Command::new("cmd.exe");
    cmd.arg("/c").arg(script);
    cmd
}

#[cfg(not(windows))]
fn shell_command(script: &Path) -> Command {
    let mut cmd = Command::new("/bin/bash");
    cmd.arg(script);
    cmd
}

#[cfg(unix)]
fn detach(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;
    cmd.process_group(0);
}

#[cfg(windows)]
fn detach(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(not(any(unix, windows)))]
fn detach(_cmd: &mut Command) {}

//! Executable lookup on the search path.

/// True when the program named by the first word of `command_line` resolves
/// on `PATH` (`PATHEXT` is honoured on Windows).
pub fn command_exists(command_line: &str) -> bool {
    let Some(program) = command_line.split_whitespace().next() else {
        return false;
    };
    match which::which(program) {
        Ok(path) => {
            tracing::debug!(program, path = %path.display(), "command found");
            true
        }
        Err(_) => false,
    }
}

use std::{path::Path, process::Command};

use tracing::{debug, info, instrument};

use crate::{DocgenError, Result};

/// Runs the external formatter over `path`.
///
/// `command` is the program followed by its arguments; the path is appended
/// as the final argument. An empty command does nothing.
///
/// # Errors
///
/// Returns `IoError` if the program cannot be started and
/// `FormatterFailure` if it exits unsuccessfully.
#[instrument]
pub fn run_formatter(command: &[String], path: &Path) -> Result<()> {
    let Some((program, args)) = command.split_first() else {
        info!("No formatter configured, skipping");
        return Ok(());
    };

    let output = Command::new(program)
        .args(args)
        .arg(path)
        .output()
        .map_err(|e| DocgenError::io(e, Path::new(program)))?;

    if !output.status.success() {
        let mut invocation = command.to_vec();
        invocation.push(path.display().to_string());
        return Err(DocgenError::formatter(
            &invocation,
            output.status,
            &output.stderr,
        ));
    }

    debug!("Formatted {} with {program}", path.display());
    Ok(())
}

use std::io::ErrorKind;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::debug;

use crate::error::ToolError;

#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Runs `program` with an explicit argument vector (no shell) and captures
/// both output streams.
///
/// # Errors
///
/// Returns [`ToolError::ProgramNotFound`] when the program is not on PATH and
/// [`ToolError::Spawn`] for any other spawn failure. A non-zero exit is not
/// an error here; callers decide.
pub async fn run_tool(program: &str, args: &[String]) -> Result<ToolOutput, ToolError> {
    debug!(program, ?args, "Running tool");
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|err| match err.kind() {
            ErrorKind::NotFound => ToolError::ProgramNotFound {
                program: program.to_owned(),
            },
            _ => ToolError::Spawn {
                program: program.to_owned(),
                args: args.to_vec(),
                source: err,
            },
        })?;

    Ok(ToolOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

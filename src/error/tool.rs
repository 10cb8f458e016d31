use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Failed to run {program} {args:?}: {source}")]
    Spawn {
        program: String,
        args: Vec<String>,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} not found. Is it installed and on PATH?")]
    ProgramNotFound { program: String },
    #[error("Load tester build failed with status {status}:\n{stderr}")]
    BuildFailed { status: ExitStatus, stderr: String },
    #[error("Load tester binary not found at '{path}'.")]
    BinaryNotFound { path: PathBuf },
    #[error("{program} exited with status {status}:\n{stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

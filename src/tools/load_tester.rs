use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::process::run_tool;
use crate::error::ToolError;

pub const DEFAULT_LOAD_TESTER_MANIFEST: &str = "load-tester/Cargo.toml";
pub const DEFAULT_LOAD_TESTER_BINARY: &str = "target/release/apiprobe-load-tester";

/// Builds the load tester with cargo and runs it against a list of URLs.
#[derive(Debug, Clone)]
pub struct LoadTester {
    cargo: String,
    manifest_path: PathBuf,
    binary: PathBuf,
}

impl LoadTester {
    #[must_use]
    pub fn new(cargo: impl Into<String>, manifest_path: PathBuf, binary: PathBuf) -> Self {
        Self {
            cargo: cargo.into(),
            manifest_path,
            binary,
        }
    }

    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    #[must_use]
    pub fn build_args(&self) -> Vec<String> {
        vec![
            "build".to_owned(),
            "--release".to_owned(),
            "--manifest-path".to_owned(),
            self.manifest_path.display().to_string(),
        ]
    }

    /// # Errors
    ///
    /// Returns [`ToolError::BuildFailed`] with cargo's stderr when the build
    /// exits non-zero, or a spawn error when cargo cannot be started.
    pub async fn build(&self) -> Result<(), ToolError> {
        info!("Building load tester from {}", self.manifest_path.display());
        let output = run_tool(&self.cargo, &self.build_args()).await?;
        if !output.success() {
            error!("Load tester build failed: {}", output.status);
            return Err(ToolError::BuildFailed {
                status: output.status,
                stderr: output.stderr,
            });
        }
        Ok(())
    }

    /// Runs the built binary with `urls` as arguments and returns its stdout.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::BinaryNotFound`] when the binary is missing and
    /// [`ToolError::Failed`] when it exits non-zero.
    pub async fn run(&self, urls: &[String]) -> Result<String, ToolError> {
        if !self.binary.is_file() {
            return Err(ToolError::BinaryNotFound {
                path: self.binary.clone(),
            });
        }
        let program = self.binary.display().to_string();
        let output = run_tool(&program, urls).await?;
        if !output.success() {
            return Err(ToolError::Failed {
                program,
                status: output.status,
                stderr: output.stderr,
            });
        }
        Ok(output.stdout)
    }

    /// # Errors
    ///
    /// Propagates the first failure from [`LoadTester::build`] or
    /// [`LoadTester::run`].
    pub async fn build_and_run(&self, urls: &[String]) -> Result<String, ToolError> {
        self.build().await?;
        self.run(urls).await
    }
}

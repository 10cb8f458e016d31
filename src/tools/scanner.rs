use tracing::debug;

use super::process::{ToolOutput, run_tool};
use crate::error::ToolError;

pub const DEFAULT_SCANNER_PROGRAM: &str = "snyk";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanAction {
    Auth,
    Test { path: String },
    Monitor { path: String },
}

impl ScanAction {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ScanAction::Auth => "auth",
            ScanAction::Test { .. } => "test",
            ScanAction::Monitor { .. } => "monitor",
        }
    }

    #[must_use]
    pub fn args(&self) -> Vec<String> {
        match self {
            ScanAction::Auth => vec!["auth".to_owned()],
            ScanAction::Test { path } => vec![
                "test".to_owned(),
                "--all-projects".to_owned(),
                format!("--path={}", path),
            ],
            ScanAction::Monitor { path } => {
                vec!["monitor".to_owned(), format!("--path={}", path)]
            }
        }
    }
}

/// Thin wrapper over the scanner CLI.
#[derive(Debug, Clone)]
pub struct Scanner {
    program: String,
}

impl Scanner {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// # Errors
    ///
    /// Returns a [`ToolError`] only when the scanner cannot be started; a
    /// non-zero exit is reported through [`ToolOutput::status`].
    pub async fn run(&self, action: &ScanAction) -> Result<ToolOutput, ToolError> {
        debug!(action = action.name(), "Invoking scanner");
        run_tool(&self.program, &action.args()).await
    }
}

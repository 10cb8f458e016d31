use std::path::PathBuf;
use std::time::Duration;

use crate::args::{PositiveU64, PositiveUsize, ProbeArgs, default_history_path};
use crate::batch::MAX_CONCURRENT_REQUESTS;
use crate::error::{AppError, AppResult, ConfigError};
use crate::http::DEFAULT_TIMEOUT;
use crate::monitor::DEFAULT_MONITOR_INTERVAL;
use crate::tools::{
    DEFAULT_LOAD_TESTER_BINARY, DEFAULT_LOAD_TESTER_MANIFEST, DEFAULT_SCANNER_PROGRAM, LoadTester,
    Scanner,
};

use super::types::ConfigFile;

const DEFAULT_CARGO_PROGRAM: &str = "cargo";

/// Effective runtime settings: CLI flags over config file over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub timeout: Duration,
    pub max_concurrent: PositiveUsize,
    pub monitor_interval: PositiveU64,
    /// `None` when history recording is disabled.
    pub history_path: Option<PathBuf>,
    pub load_tester: LoadTester,
    pub scanner: Scanner,
}

/// # Errors
///
/// Returns [`ConfigError::FieldMustBePositive`] for zero-valued numeric keys
/// and [`ConfigError::FieldEmpty`] for blank paths or program names.
pub fn resolve_settings(args: &ProbeArgs, config: Option<&ConfigFile>) -> AppResult<Settings> {
    let fallback = ConfigFile::default();
    let config = config.unwrap_or(&fallback);

    let timeout = match (args.timeout_ms, config.timeout_ms) {
        (Some(cli), _) => Duration::from_millis(cli.get()),
        (None, Some(ms)) => Duration::from_millis(positive_u64("timeout_ms", ms)?.get()),
        (None, None) => DEFAULT_TIMEOUT,
    };

    let max_concurrent = match (args.max_concurrent, config.max_concurrent_requests) {
        (Some(cli), _) => cli,
        (None, Some(value)) => positive_usize("max_concurrent_requests", value)?,
        (None, None) => positive_usize("max_concurrent_requests", MAX_CONCURRENT_REQUESTS)?,
    };

    let monitor_interval = positive_u64(
        "monitor_interval_secs",
        config
            .monitor_interval_secs
            .unwrap_or(DEFAULT_MONITOR_INTERVAL.as_secs()),
    )?;

    let history_enabled = !args.no_history && config.history.unwrap_or(true);
    let history_path = if history_enabled {
        Some(match (&args.history_path, &config.history_path) {
            (Some(cli), _) => non_empty_path("history_path", cli)?,
            (None, Some(path)) => non_empty_path("history_path", path)?,
            (None, None) => default_history_path(),
        })
    } else {
        None
    };

    let load_tester_config = config.load_tester.clone().unwrap_or_default();
    let load_tester = LoadTester::new(
        non_empty(
            "load_tester.cargo",
            load_tester_config.cargo.as_deref(),
            DEFAULT_CARGO_PROGRAM,
        )?,
        PathBuf::from(non_empty(
            "load_tester.manifest_path",
            load_tester_config.manifest_path.as_deref(),
            DEFAULT_LOAD_TESTER_MANIFEST,
        )?),
        PathBuf::from(non_empty(
            "load_tester.binary",
            load_tester_config.binary.as_deref(),
            DEFAULT_LOAD_TESTER_BINARY,
        )?),
    );

    let scanner = Scanner::new(non_empty(
        "scanner.program",
        config
            .scanner
            .as_ref()
            .and_then(|scanner| scanner.program.as_deref()),
        DEFAULT_SCANNER_PROGRAM,
    )?);

    Ok(Settings {
        timeout,
        max_concurrent,
        monitor_interval,
        history_path,
        load_tester,
        scanner,
    })
}

fn positive_u64(field: &'static str, value: u64) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value)
        .map_err(|err| AppError::config(ConfigError::FieldMustBePositive { field, source: err }))
}

fn positive_usize(field: &'static str, value: usize) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .map_err(|err| AppError::config(ConfigError::FieldMustBePositive { field, source: err }))
}

fn non_empty_path(field: &'static str, value: &str) -> AppResult<PathBuf> {
    if value.trim().is_empty() {
        return Err(AppError::config(ConfigError::FieldEmpty { field }));
    }
    Ok(PathBuf::from(value))
}

fn non_empty(field: &'static str, value: Option<&str>, default: &str) -> AppResult<String> {
    match value {
        Some(value) if value.trim().is_empty() => {
            Err(AppError::config(ConfigError::FieldEmpty { field }))
        }
        Some(value) => Ok(value.to_owned()),
        None => Ok(default.to_owned()),
    }
}

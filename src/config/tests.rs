use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tempfile::tempdir;

use super::types::ConfigFile;
use super::{load_config, load_config_file, resolve_settings};
use crate::args::ProbeArgs;
use crate::error::{AppError, ConfigError};

fn parse_args(argv: &[&str]) -> Result<ProbeArgs, String> {
    ProbeArgs::try_parse_from(argv).map_err(|err| format!("parse failed: {}", err))
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("apiprobe.toml");
    let content = r#"
timeout_ms = 2500
max_concurrent_requests = 3
monitor_interval_secs = 15
history_path = "/tmp/apiprobe-history.json"

[load_tester]
manifest_path = "tools/lt/Cargo.toml"
binary = "tools/lt/target/release/lt"

[scanner]
program = "snyk-beta"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.timeout_ms != Some(2500) || config.max_concurrent_requests != Some(3) {
        return Err(format!("Unexpected numeric keys: {:?}", config));
    }
    let load_tester = config.load_tester.ok_or("Expected [load_tester]")?;
    if load_tester.manifest_path.as_deref() != Some("tools/lt/Cargo.toml") {
        return Err("Unexpected manifest_path".to_owned());
    }
    let scanner = config.scanner.ok_or("Expected [scanner]")?;
    if scanner.program.as_deref() != Some("snyk-beta") {
        return Err("Unexpected scanner program".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("apiprobe.json");
    std::fs::write(&path, r#"{"timeout_ms": 1000, "history": false}"#)
        .map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.timeout_ms != Some(1000) || config.history != Some(false) {
        return Err(format!("Unexpected config: {:?}", config));
    }
    Ok(())
}

#[test]
fn unknown_keys_are_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("apiprobe.toml");
    std::fs::write(&path, "timeout = 5\n").map_err(|err| format!("write failed: {}", err))?;

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        other => Err(format!("Expected ParseToml error, got {:?}", other)),
    }
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("apiprobe.yaml");
    std::fs::write(&path, "timeout_ms: 5\n").map_err(|err| format!("write failed: {}", err))?;

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        other => Err(format!("Expected UnsupportedExtension, got {:?}", other)),
    }
}

#[test]
fn explicit_missing_config_is_an_error() -> Result<(), String> {
    match load_config(Some("/definitely/not/here/apiprobe.toml")) {
        Err(AppError::Config(ConfigError::ReadConfig { .. })) => Ok(()),
        other => Err(format!("Expected ReadConfig error, got {:?}", other)),
    }
}

#[test]
fn defaults_apply_without_config() -> Result<(), String> {
    let args = parse_args(&["apiprobe", "history"])?;
    let settings = resolve_settings(&args, None).map_err(|err| err.to_string())?;

    if settings.timeout != Duration::from_millis(5000) {
        return Err(format!("Unexpected timeout: {:?}", settings.timeout));
    }
    if settings.max_concurrent.get() != 5 {
        return Err("Unexpected max_concurrent".to_owned());
    }
    if settings.monitor_interval.get() != 60 {
        return Err("Unexpected monitor interval".to_owned());
    }
    if settings.history_path.is_none() {
        return Err("History should be enabled by default".to_owned());
    }
    if settings.scanner.program() != "snyk" {
        return Err("Unexpected scanner program".to_owned());
    }
    if settings.load_tester.binary() != PathBuf::from("target/release/apiprobe-load-tester") {
        return Err("Unexpected load tester binary".to_owned());
    }
    Ok(())
}

#[test]
fn cli_flags_override_config() -> Result<(), String> {
    let args = parse_args(&[
        "apiprobe",
        "--timeout-ms",
        "750",
        "--max-concurrent",
        "2",
        "--history-path",
        "/tmp/cli-history.json",
        "history",
    ])?;
    let config = ConfigFile {
        timeout_ms: Some(9000),
        max_concurrent_requests: Some(8),
        history_path: Some("/tmp/config-history.json".to_owned()),
        ..ConfigFile::default()
    };
    let settings = resolve_settings(&args, Some(&config)).map_err(|err| err.to_string())?;

    if settings.timeout != Duration::from_millis(750) || settings.max_concurrent.get() != 2 {
        return Err(format!("CLI flags not applied: {:?}", settings));
    }
    if settings.history_path != Some(PathBuf::from("/tmp/cli-history.json")) {
        return Err(format!("Unexpected history path: {:?}", settings.history_path));
    }
    Ok(())
}

#[test]
fn history_can_be_disabled() -> Result<(), String> {
    let args = parse_args(&["apiprobe", "--no-history", "history"])?;
    let settings = resolve_settings(&args, None).map_err(|err| err.to_string())?;
    if settings.history_path.is_some() {
        return Err("--no-history must disable recording".to_owned());
    }

    let args = parse_args(&["apiprobe", "history"])?;
    let config = ConfigFile {
        history: Some(false),
        ..ConfigFile::default()
    };
    let settings = resolve_settings(&args, Some(&config)).map_err(|err| err.to_string())?;
    if settings.history_path.is_some() {
        return Err("history = false must disable recording".to_owned());
    }
    Ok(())
}

#[test]
fn zero_values_in_config_are_rejected() -> Result<(), String> {
    let args = parse_args(&["apiprobe", "history"])?;
    let cases = [
        (
            ConfigFile {
                timeout_ms: Some(0),
                ..ConfigFile::default()
            },
            "timeout_ms",
        ),
        (
            ConfigFile {
                max_concurrent_requests: Some(0),
                ..ConfigFile::default()
            },
            "max_concurrent_requests",
        ),
        (
            ConfigFile {
                monitor_interval_secs: Some(0),
                ..ConfigFile::default()
            },
            "monitor_interval_secs",
        ),
    ];
    for (config, expected) in cases {
        match resolve_settings(&args, Some(&config)) {
            Err(AppError::Config(ConfigError::FieldMustBePositive { field, .. }))
                if field == expected => {}
            other => return Err(format!("Expected {} rejection, got {:?}", expected, other)),
        }
    }
    Ok(())
}

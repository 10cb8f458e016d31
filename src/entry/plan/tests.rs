use clap::Parser;

use super::build::build_plan;
use super::types::RunPlan;
use crate::args::ProbeArgs;
use crate::config::types::ConfigFile;
use crate::config::resolve_settings;

fn plan_for(argv: &[&str], config: Option<&ConfigFile>) -> Result<RunPlan, String> {
    let args = ProbeArgs::try_parse_from(argv).map_err(|err| format!("parse failed: {}", err))?;
    let settings = resolve_settings(&args, config).map_err(|err| err.to_string())?;
    Ok(build_plan(args.command, &settings))
}

#[test]
fn batch_urls_get_api_version() -> Result<(), String> {
    let plan = plan_for(
        &[
            "apiprobe",
            "batch-request",
            "--url",
            "http://a.test/items",
            "http://b.test/items?page=2",
            "--apiversion",
            "v2",
        ],
        None,
    )?;
    let RunPlan::BatchRequest { urls } = plan else {
        return Err("Expected batch-request plan".to_owned());
    };
    if urls
        != [
            "http://a.test/items?apiversion=v2",
            "http://b.test/items?page=2&apiversion=v2",
        ]
    {
        return Err(format!("Unexpected urls: {:?}", urls));
    }
    Ok(())
}

#[test]
fn load_test_merges_flag_and_positional_urls() -> Result<(), String> {
    let plan = plan_for(
        &[
            "apiprobe",
            "load-test",
            "--url",
            "http://a.test",
            "http://b.test",
        ],
        None,
    )?;
    let RunPlan::LoadTest { urls } = plan else {
        return Err("Expected load-test plan".to_owned());
    };
    if urls.len() != 2 {
        return Err(format!("Unexpected urls: {:?}", urls));
    }
    Ok(())
}

#[test]
fn monitor_interval_falls_back_to_config() -> Result<(), String> {
    let config = ConfigFile {
        monitor_interval_secs: Some(15),
        ..ConfigFile::default()
    };
    let plan = plan_for(
        &["apiprobe", "monitor-health-endpoint", "--url", "http://m.test"],
        Some(&config),
    )?;
    let RunPlan::Monitor { interval, .. } = plan else {
        return Err("Expected monitor plan".to_owned());
    };
    if interval.get() != 15 {
        return Err(format!("Expected 15s, got {}", interval.get()));
    }

    let plan = plan_for(
        &[
            "apiprobe",
            "monitor-health-endpoint",
            "--url",
            "http://m.test",
            "--interval",
            "5",
        ],
        Some(&config),
    )?;
    let RunPlan::Monitor { interval, .. } = plan else {
        return Err("Expected monitor plan".to_owned());
    };
    if interval.get() != 5 {
        return Err(format!("Expected 5s, got {}", interval.get()));
    }
    Ok(())
}

#[test]
fn history_params_never_contain_token() -> Result<(), String> {
    let plan = plan_for(
        &[
            "apiprobe",
            "authenticated-call",
            "--url",
            "http://auth.test/me",
            "--token",
            "s3cr3t-token",
            "--method",
            "post",
            "--data",
            r#"{"name":"probe"}"#,
        ],
        None,
    )?;
    if plan.name() != "authenticated-call" {
        return Err(format!("Unexpected name: {}", plan.name()));
    }
    let params = plan.params().to_string();
    if params.contains("s3cr3t-token") {
        return Err(format!("Token leaked into history: {}", params));
    }
    if !params.contains("\"POST\"") || !params.contains("probe") {
        return Err(format!("Missing params: {}", params));
    }
    Ok(())
}

#[test]
fn history_command_is_not_recorded() -> Result<(), String> {
    let plan = plan_for(&["apiprobe", "history"], None)?;
    if plan.records_history() {
        return Err("history must not record itself".to_owned());
    }
    let plan = plan_for(&["apiprobe", "snyk-test", "--path", "./svc"], None)?;
    if !plan.records_history() || plan.name() != "snyk-test" {
        return Err("snyk-test should be recorded".to_owned());
    }
    Ok(())
}

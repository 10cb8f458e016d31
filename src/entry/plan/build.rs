use crate::args::{
    AuthenticatedCallArgs, BatchRequestArgs, CheckMoreHealthArgs, CheckVersionArgs, Command,
    HealthCheckArgs, LoadTestArgs, MonitorArgs, ScanPathArgs, UrlArgs,
};
use crate::config::Settings;
use crate::http::with_api_version;
use crate::tools::ScanAction;

use super::types::RunPlan;

pub(crate) fn build_plan(command: Command, settings: &Settings) -> RunPlan {
    match command {
        Command::CheckBacklog(UrlArgs { url }) => RunPlan::CheckBacklog { url },
        Command::CheckVersion(CheckVersionArgs { url, api_version }) => RunPlan::CheckVersion {
            url,
            expected: api_version,
        },
        Command::BatchRequest(BatchRequestArgs { url, api_version }) => RunPlan::BatchRequest {
            urls: versioned(url, api_version.as_deref()),
        },
        Command::LoadTest(args) => {
            let targets = args.targets();
            let LoadTestArgs { api_version, .. } = args;
            RunPlan::LoadTest {
                urls: versioned(targets, api_version.as_deref()),
            }
        }
        Command::HealthCheck(HealthCheckArgs { url, api_version }) => {
            RunPlan::HealthCheck { url, api_version }
        }
        Command::MonitorHealthEndpoint(MonitorArgs { url, interval }) => RunPlan::Monitor {
            url,
            interval: interval.unwrap_or(settings.monitor_interval),
        },
        Command::ResponseTime(UrlArgs { url }) => RunPlan::ResponseTime { url },
        Command::AuthenticatedCall(AuthenticatedCallArgs {
            url,
            token,
            method,
            data,
        }) => RunPlan::AuthenticatedCall {
            url,
            token,
            method,
            data,
        },
        Command::CheckMoreHealth(CheckMoreHealthArgs { urls }) => RunPlan::CheckMoreHealth { urls },
        Command::History => RunPlan::History,
        Command::SnykAuth => RunPlan::Scan(ScanAction::Auth),
        Command::SnykTest(ScanPathArgs { path }) => RunPlan::Scan(ScanAction::Test { path }),
        Command::SnykMonitor(ScanPathArgs { path }) => RunPlan::Scan(ScanAction::Monitor { path }),
    }
}

fn versioned(urls: Vec<String>, api_version: Option<&str>) -> Vec<String> {
    match api_version {
        Some(version) => urls
            .iter()
            .map(|url| with_api_version(url, version))
            .collect(),
        None => urls,
    }
}

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, warn};

use crate::batch::{BatchDispatcher, print_outcome, print_summary};
use crate::config::Settings;
use crate::error::{AppError, AppResult, HistoryError, RequestError};
use crate::history::{HistoryEntry, HistoryStore, print_history};
use crate::http::{Executor, ReqwestTransport, Transport};
use crate::monitor::{ConsoleObserver, MonitorSession};
use crate::probe::{
    HealthChecker, VersionCheck, authenticated_call, check_version, fetch_backlog,
    measure_response_time, report_health, report_response_time,
};
use crate::system::console::{Console, Tone};
use crate::system::shutdown::{setup_signal_shutdown_handler, shutdown_channel};
use crate::tools::ScanAction;

use super::types::RunPlan;

/// Runs one command. Everything except `load-test` reports its own failures
/// and succeeds; the returned error ends the process with a non-zero code.
pub(crate) async fn execute_plan(
    plan: &RunPlan,
    settings: &Settings,
    console: &Console,
) -> AppResult<()> {
    let result = run_plan(plan, settings, console).await;

    if let (true, Some(path)) = (plan.records_history(), &settings.history_path) {
        let summary = match &result {
            Ok(summary) => summary.clone(),
            Err(err) => format!("Error: {}", err),
        };
        let entry = HistoryEntry::now(plan.name(), plan.params(), summary);
        let store = HistoryStore::new(path.clone());
        match tokio::task::spawn_blocking(move || store.append(entry)).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!("Failed to record command history: {}", err),
            Err(err) => warn!("History writer task failed: {}", err),
        }
    }

    result.map(drop)
}

fn transport(settings: &Settings) -> AppResult<Arc<dyn Transport>> {
    Ok(Arc::new(ReqwestTransport::new(settings.timeout)?))
}

fn render(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

async fn run_plan(plan: &RunPlan, settings: &Settings, console: &Console) -> AppResult<String> {
    match plan {
        RunPlan::CheckBacklog { url } => {
            let executor = Executor::new(transport(settings)?);
            Ok(match fetch_backlog(&executor, url).await {
                Ok(backlog) => {
                    console.out(Tone::Info, "API Backlog:");
                    console.out(Tone::Plain, render(&backlog));
                    render(&backlog)
                }
                Err(err) => report_request_error(console, "Failed to fetch backlog", &err),
            })
        }
        RunPlan::CheckVersion { url, expected } => {
            let executor = Executor::new(transport(settings)?);
            Ok(match check_version(&executor, url, expected).await {
                Ok(VersionCheck::Compatible { current }) => {
                    let message = format!("API version {} is compatible.", current);
                    console.out(Tone::Success, &message);
                    message
                }
                Ok(VersionCheck::Mismatch { expected, current }) => {
                    let message = format!(
                        "API version mismatch: expected {}, but got {}",
                        expected,
                        current.as_deref().unwrap_or("no version")
                    );
                    console.out(Tone::Warning, &message);
                    message
                }
                Err(err) => report_request_error(console, "Failed to check version", &err),
            })
        }
        RunPlan::BatchRequest { urls } => {
            let executor = Executor::new(transport(settings)?);
            let dispatcher = BatchDispatcher::new(executor, settings.max_concurrent);
            let results = dispatcher
                .dispatch(urls, |outcome| print_outcome(console, outcome))
                .await;
            print_summary(console, &results);
            Ok(format!(
                "{} succeeded, {} failed",
                results.success_count(),
                results.failure_count()
            ))
        }
        RunPlan::LoadTest { urls } => {
            let stdout = settings
                .load_tester
                .build_and_run(urls)
                .await
                .inspect_err(|err| error!("Load test failed: {}", err))?;
            console.out(Tone::Info, "Load Tester Output:");
            console.relay(&stdout);
            Ok("Load test completed".to_owned())
        }
        RunPlan::HealthCheck { url, api_version } => {
            match api_version {
                Some(version) => console.out(Tone::Info, format!("Using version: {}", version)),
                None => console.out(Tone::Info, "No API version specified."),
            }
            let checker = HealthChecker::new(transport(settings)?);
            let report = checker.check(url).await;
            report_health(console, &report);
            Ok(report.summary())
        }
        RunPlan::Monitor { url, interval } => {
            let checker = HealthChecker::new(transport(settings)?);
            let (shutdown_tx, shutdown_rx) = shutdown_channel();
            let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

            console.out(
                Tone::Info,
                format!(
                    "Monitoring {} every {}s. Press Ctrl+C to stop.",
                    url,
                    interval.get()
                ),
            );
            let mut session = MonitorSession::from_secs(url.clone(), *interval);
            let mut observer = ConsoleObserver::new(*console);
            let report = session.run(&checker, shutdown_rx, &mut observer).await;

            drop(shutdown_tx.send(()));
            signal_handle.await?;
            console.out(Tone::Warning, "Monitoring stopped.");
            Ok(format!("Monitoring stopped after {} checks", report.checks))
        }
        RunPlan::ResponseTime { url } => {
            let executor = Executor::new(transport(settings)?);
            let result = measure_response_time(&executor, url).await;
            report_response_time(console, &result);
            Ok(match result {
                Ok(timing) => format!("{} ms", timing.elapsed_ms),
                Err(err) => format!("Error: {}", err),
            })
        }
        RunPlan::AuthenticatedCall {
            url,
            token,
            method,
            data,
        } => {
            let executor = Executor::new(transport(settings)?);
            Ok(
                match authenticated_call(&executor, url, *method, data.as_ref(), token).await {
                    Ok(body) => {
                        console.out(Tone::Success, "Request successful! Response:");
                        console.out(Tone::Plain, render(&body));
                        format!("{} succeeded", method.as_str())
                    }
                    Err(err) => report_request_error(console, "Request failed", &err),
                },
            )
        }
        RunPlan::CheckMoreHealth { urls } => {
            let checker = HealthChecker::new(transport(settings)?);
            let reports = checker
                .check_many(urls, |report| report_health(console, report))
                .await;
            let healthy = reports.iter().filter(|report| report.is_healthy()).count();
            Ok(format!("{} of {} healthy", healthy, reports.len()))
        }
        RunPlan::History => {
            let store = HistoryStore::new(
                settings
                    .history_path
                    .clone()
                    .unwrap_or_else(crate::args::default_history_path),
            );
            match store.load() {
                Ok(entries) => print_history(console, &entries),
                Err(HistoryError::Missing { .. }) => {
                    console.out(Tone::Warning, "No command history found.");
                }
                Err(err) => console.err(Tone::Failure, err),
            }
            Ok(String::new())
        }
        RunPlan::Scan(action) => Ok(run_scan(settings, console, action).await),
    }
}

async fn run_scan(settings: &Settings, console: &Console, action: &ScanAction) -> String {
    match settings.scanner.run(action).await {
        Ok(output) if output.success() => {
            console.out(Tone::Success, output.stdout.trim_end());
            format!("{} {} succeeded", settings.scanner.program(), action.name())
        }
        Ok(output) => {
            console.err(Tone::Failure, output.stderr.trim_end());
            format!(
                "{} {} failed: {}",
                settings.scanner.program(),
                action.name(),
                output.status
            )
        }
        Err(err) => {
            let err = AppError::tool(err);
            console.err(Tone::Failure, &err);
            format!("Error: {}", err)
        }
    }
}

fn report_request_error(console: &Console, context: &str, err: &RequestError) -> String {
    let message = format!("{}: {}", context, err);
    console.err(Tone::Failure, &message);
    message
}

use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};

use crate::args::PositiveU64;
use crate::probe::{HealthChecker, HealthReport, report_health};
use crate::system::console::{Console, Tone};
use crate::system::shutdown::ShutdownReceiver;

/// Interval used when neither the CLI nor the config sets one.
pub const DEFAULT_MONITOR_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Idle,
    Monitoring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorReport {
    pub checks: u64,
}

/// Receives every check the session performs.
pub trait MonitorObserver {
    fn check_started(&mut self, url: &str);
    fn check_finished(&mut self, report: &HealthReport);
}

/// Prints each check the way the one-shot health check does.
pub struct ConsoleObserver {
    console: Console,
}

impl ConsoleObserver {
    #[must_use]
    pub const fn new(console: Console) -> Self {
        Self { console }
    }
}

impl MonitorObserver for ConsoleObserver {
    fn check_started(&mut self, _url: &str) {
        self.console.out(Tone::Plain, "Checking endpoint health..🎍 ");
        self.console.out(
            Tone::Plain,
            format!(
                "Timestamp: {}",
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
        );
    }

    fn check_finished(&mut self, report: &HealthReport) {
        report_health(&self.console, report);
    }
}

/// Checks one URL immediately, then again `interval` after each completed
/// check, until the shutdown receiver fires.
#[derive(Debug)]
pub struct MonitorSession {
    url: String,
    interval: Duration,
    state: MonitorState,
}

impl MonitorSession {
    #[must_use]
    pub fn new(url: impl Into<String>, interval: Duration) -> Self {
        Self {
            url: url.into(),
            interval,
            state: MonitorState::Idle,
        }
    }

    #[must_use]
    pub fn from_secs(url: impl Into<String>, interval: PositiveU64) -> Self {
        Self::new(url, Duration::from_secs(interval.get()))
    }

    #[must_use]
    pub const fn state(&self) -> MonitorState {
        self.state
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs until shutdown. An in-flight check or pending wait is abandoned
    /// as soon as the shutdown signal arrives.
    pub async fn run<O>(
        &mut self,
        checker: &HealthChecker,
        mut shutdown_rx: ShutdownReceiver,
        observer: &mut O,
    ) -> MonitorReport
    where
        O: MonitorObserver,
    {
        self.state = MonitorState::Monitoring;
        info!(url = %self.url, interval = ?self.interval, "Monitoring started");
        let mut checks: u64 = 0;

        loop {
            observer.check_started(&self.url);
            let report = tokio::select! {
                biased;
                _ = shutdown_rx.recv() => break,
                report = checker.check(&self.url) => report,
            };
            checks = checks.saturating_add(1);
            observer.check_finished(&report);
            debug!(checks, healthy = report.is_healthy(), "Monitor check finished");

            tokio::select! {
                biased;
                _ = shutdown_rx.recv() => break,
                () = tokio::time::sleep(self.interval) => {}
            }
        }

        self.state = MonitorState::Idle;
        info!(url = %self.url, checks, "Monitoring stopped");
        MonitorReport { checks }
    }
}

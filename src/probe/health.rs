use std::sync::Arc;

use tracing::debug;

use crate::error::RequestError;
use crate::http::{ApiRequest, HTTP_OK, Transport, is_valid_url};
use crate::system::console::{Console, Tone};

pub const HEALTHY_MESSAGE: &str = "Endpoint is healthy";
pub const UNHEALTHY_MESSAGE: &str = "Endpoint is down";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnhealthyReason {
    StatusCode(u16),
    TimedOut,
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy(UnhealthyReason),
    InvalidUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub url: String,
    pub status: HealthStatus,
}

impl HealthReport {
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self.status, HealthStatus::Healthy)
    }

    #[must_use]
    pub fn summary(&self) -> String {
        match &self.status {
            HealthStatus::Healthy => format!("{}: {}", HEALTHY_MESSAGE, self.url),
            HealthStatus::InvalidUrl => format!("Invalid URL: {}", self.url),
            HealthStatus::Unhealthy(UnhealthyReason::StatusCode(code)) => format!(
                "{}: {} - Status Code: {}",
                UNHEALTHY_MESSAGE, self.url, code
            ),
            HealthStatus::Unhealthy(UnhealthyReason::TimedOut) => {
                format!("{}: {} - Request timed out", UNHEALTHY_MESSAGE, self.url)
            }
            HealthStatus::Unhealthy(UnhealthyReason::Transport(message)) => {
                format!("{}: {} - {}", UNHEALTHY_MESSAGE, self.url, message)
            }
        }
    }
}

/// Healthy means exactly HTTP 200. Every failure is folded into the report;
/// nothing propagates past `check`.
#[derive(Clone)]
pub struct HealthChecker {
    transport: Arc<dyn Transport>,
}

impl HealthChecker {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn check(&self, url: &str) -> HealthReport {
        if !is_valid_url(url) {
            return HealthReport {
                url: url.to_owned(),
                status: HealthStatus::InvalidUrl,
            };
        }

        let status = match self.transport.send(ApiRequest::get(url)).await {
            Ok(response) if response.status == HTTP_OK => HealthStatus::Healthy,
            Ok(response) => HealthStatus::Unhealthy(UnhealthyReason::StatusCode(response.status)),
            Err(RequestError::Timeout) => HealthStatus::Unhealthy(UnhealthyReason::TimedOut),
            Err(RequestError::Status { code }) => {
                HealthStatus::Unhealthy(UnhealthyReason::StatusCode(code))
            }
            Err(err @ (RequestError::InvalidUrl { .. } | RequestError::Other { .. })) => {
                HealthStatus::Unhealthy(UnhealthyReason::Transport(err.to_string()))
            }
        };
        debug!(url, ?status, "Health check finished");

        HealthReport {
            url: url.to_owned(),
            status,
        }
    }

    /// Checks each endpoint in turn, one at a time.
    pub async fn check_many<F>(&self, urls: &[String], mut on_report: F) -> Vec<HealthReport>
    where
        F: FnMut(&HealthReport),
    {
        let mut reports = Vec::with_capacity(urls.len());
        for url in urls {
            let report = self.check(url).await;
            on_report(&report);
            reports.push(report);
        }
        reports
    }
}

pub fn report_health(console: &Console, report: &HealthReport) {
    let summary = report.summary();
    match &report.status {
        HealthStatus::Healthy => console.out(Tone::Emphasis, summary),
        HealthStatus::Unhealthy(UnhealthyReason::StatusCode(_)) => {
            console.err(Tone::Warning, summary);
        }
        HealthStatus::Unhealthy(UnhealthyReason::TimedOut | UnhealthyReason::Transport(_))
        | HealthStatus::InvalidUrl => console.err(Tone::Failure, summary),
    }
}

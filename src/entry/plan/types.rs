use serde_json::{Value, json};

use crate::args::{HttpMethod, PositiveU64};
use crate::tools::ScanAction;

const REDACTED: &str = "<redacted>";

pub(in crate::entry) enum RunPlan {
    CheckBacklog {
        url: String,
    },
    CheckVersion {
        url: String,
        expected: String,
    },
    BatchRequest {
        urls: Vec<String>,
    },
    LoadTest {
        urls: Vec<String>,
    },
    HealthCheck {
        url: String,
        api_version: Option<String>,
    },
    Monitor {
        url: String,
        interval: PositiveU64,
    },
    ResponseTime {
        url: String,
    },
    AuthenticatedCall {
        url: String,
        token: String,
        method: HttpMethod,
        data: Option<Value>,
    },
    CheckMoreHealth {
        urls: Vec<String>,
    },
    History,
    Scan(ScanAction),
}

impl RunPlan {
    /// Sub-command name as typed on the command line.
    pub(super) const fn name(&self) -> &'static str {
        match self {
            RunPlan::CheckBacklog { .. } => "check-backlog",
            RunPlan::CheckVersion { .. } => "check-version",
            RunPlan::BatchRequest { .. } => "batch-request",
            RunPlan::LoadTest { .. } => "load-test",
            RunPlan::HealthCheck { .. } => "health-check",
            RunPlan::Monitor { .. } => "monitor-health-endpoint",
            RunPlan::ResponseTime { .. } => "response-time",
            RunPlan::AuthenticatedCall { .. } => "authenticated-call",
            RunPlan::CheckMoreHealth { .. } => "check-more-health",
            RunPlan::History => "history",
            RunPlan::Scan(ScanAction::Auth) => "snyk-auth",
            RunPlan::Scan(ScanAction::Test { .. }) => "snyk-test",
            RunPlan::Scan(ScanAction::Monitor { .. }) => "snyk-monitor",
        }
    }

    /// Parameters recorded in the history log. Bearer tokens never are.
    pub(super) fn params(&self) -> Value {
        match self {
            RunPlan::CheckBacklog { url } | RunPlan::ResponseTime { url } => json!({ "url": url }),
            RunPlan::CheckVersion { url, expected } => {
                json!({ "url": url, "apiversion": expected })
            }
            RunPlan::BatchRequest { urls }
            | RunPlan::LoadTest { urls }
            | RunPlan::CheckMoreHealth { urls } => json!({ "urls": urls }),
            RunPlan::HealthCheck { url, api_version } => {
                json!({ "url": url, "apiversion": api_version })
            }
            RunPlan::Monitor { url, interval } => {
                json!({ "url": url, "interval": interval.get() })
            }
            RunPlan::AuthenticatedCall {
                url, method, data, ..
            } => json!({
                "url": url,
                "token": REDACTED,
                "method": method.as_str(),
                "data": data,
            }),
            RunPlan::History | RunPlan::Scan(ScanAction::Auth) => json!({}),
            RunPlan::Scan(ScanAction::Test { path } | ScanAction::Monitor { path }) => {
                json!({ "path": path })
            }
        }
    }

    pub(super) const fn records_history(&self) -> bool {
        !matches!(self, RunPlan::History)
    }
}

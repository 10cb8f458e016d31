//! Single-endpoint probes: health, response time, version, backlog, and
//! authenticated calls.
mod api;
mod health;
mod timing;


pub use api::{VersionCheck, authenticated_call, check_version, fetch_backlog};
pub use health::{
    HEALTHY_MESSAGE, HealthChecker, HealthReport, HealthStatus, UNHEALTHY_MESSAGE,
    UnhealthyReason, report_health,
};
pub use timing::{ResponseTiming, measure_response_time, report_response_time};

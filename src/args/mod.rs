//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::{
    AuthenticatedCallArgs, BatchRequestArgs, CheckMoreHealthArgs, CheckVersionArgs, Command,
    HealthCheckArgs, LoadTestArgs, MonitorArgs, ProbeArgs, ScanPathArgs, UrlArgs,
};
pub use types::{HttpMethod, PositiveU64, PositiveUsize};

pub(crate) use defaults::{DEFAULT_USER_AGENT, default_history_path};

use clap::{ArgGroup, Args, Parser, Subcommand};
use serde_json::Value;

use super::parsers::{
    parse_api_version, parse_bool_env, parse_json_body, parse_positive_u64, parse_positive_usize,
    parse_token,
};
use super::types::{HttpMethod, PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Exercise and monitor HTTP(S) API endpoints: health checks, response times, version checks, authenticated calls, and batched requests.",
    arg_required_else_help = true,
    subcommand_required = true
)]
pub struct ProbeArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (TOML or JSON). Defaults to ./apiprobe.toml or ./apiprobe.json
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Per-request timeout in milliseconds (default: 5000)
    #[arg(long = "timeout-ms", global = true, value_parser = parse_positive_u64)]
    pub timeout_ms: Option<PositiveU64>,

    /// Maximum number of in-flight requests for batch-request (default: 5)
    #[arg(long = "max-concurrent", global = true, value_parser = parse_positive_usize)]
    pub max_concurrent: Option<PositiveUsize>,

    /// Command history file (default: ~/.apiprobe/history.json)
    #[arg(long = "history-path", global = true)]
    pub history_path: Option<String>,

    /// Do not record this invocation in the command history
    #[arg(long = "no-history", global = true)]
    pub no_history: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by APIPROBE_LOG/RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", global = true, value_parser = parse_bool_env)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Check the API backlog
    CheckBacklog(UrlArgs),
    /// Check API version compatibility
    CheckVersion(CheckVersionArgs),
    /// Test a batch of API requests
    BatchRequest(BatchRequestArgs),
    /// Build and run the compiled load tester against a batch of URLs
    LoadTest(LoadTestArgs),
    /// Check API endpoint health
    HealthCheck(HealthCheckArgs),
    /// Monitor API health endpoint
    MonitorHealthEndpoint(MonitorArgs),
    /// Check API response time
    ResponseTime(UrlArgs),
    /// Test API authentication
    AuthenticatedCall(AuthenticatedCallArgs),
    /// Check health for multiple API endpoints
    CheckMoreHealth(CheckMoreHealthArgs),
    /// Show the command history
    History,
    /// Authenticate with Snyk
    SnykAuth,
    /// Run Snyk test for vulnerabilities
    SnykTest(ScanPathArgs),
    /// Monitor the project for vulnerabilities
    SnykMonitor(ScanPathArgs),
}

#[derive(Debug, Args, Clone)]
pub struct UrlArgs {
    /// Base URL to check
    #[arg(long, short)]
    pub url: String,
}

#[derive(Debug, Args, Clone)]
pub struct CheckVersionArgs {
    /// Base URL to check
    #[arg(long, short)]
    pub url: String,

    /// Expected API version
    #[arg(long = "apiversion", value_parser = parse_api_version)]
    pub api_version: String,
}

#[derive(Debug, Args, Clone)]
pub struct BatchRequestArgs {
    /// URLs to request (repeatable)
    #[arg(long, short, required = true, num_args = 1..)]
    pub url: Vec<String>,

    /// API version appended to every URL as `apiversion=<value>`
    #[arg(long = "apiversion", value_parser = parse_api_version)]
    pub api_version: Option<String>,
}

#[derive(Debug, Args, Clone)]
#[command(group(
    ArgGroup::new("targets")
        .required(true)
        .multiple(true)
        .args(["url", "urls"])
))]
pub struct LoadTestArgs {
    /// URLs to load test (repeatable)
    #[arg(long, short, num_args = 1..)]
    pub url: Vec<String>,

    /// URLs to load test
    #[arg(value_name = "URLS")]
    pub urls: Vec<String>,

    /// API version appended to every URL as `apiversion=<value>`
    #[arg(long = "apiversion", value_parser = parse_api_version)]
    pub api_version: Option<String>,
}

impl LoadTestArgs {
    #[must_use]
    pub fn targets(&self) -> Vec<String> {
        self.url.iter().chain(self.urls.iter()).cloned().collect()
    }
}

#[derive(Debug, Args, Clone)]
pub struct HealthCheckArgs {
    /// URL to check
    #[arg(long, short)]
    pub url: String,

    /// API version to report alongside the check
    #[arg(long = "apiversion", value_parser = parse_api_version)]
    pub api_version: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct MonitorArgs {
    /// URL to check
    #[arg(long, short)]
    pub url: String,

    /// Interval between checks in seconds (default: 60)
    #[arg(long, short, value_parser = parse_positive_u64)]
    pub interval: Option<PositiveU64>,
}

#[derive(Debug, Args, Clone)]
pub struct AuthenticatedCallArgs {
    /// API endpoint to call
    #[arg(long, short)]
    pub url: String,

    /// Bearer token for authentication
    #[arg(long, value_parser = parse_token)]
    pub token: String,

    /// HTTP method to use
    #[arg(long, short = 'X', ignore_case = true)]
    pub method: HttpMethod,

    /// JSON data sent with the request (for POST, PUT, PATCH)
    #[arg(long, short, value_parser = parse_json_body)]
    pub data: Option<Value>,
}

#[derive(Debug, Args, Clone)]
pub struct CheckMoreHealthArgs {
    /// URLs to check
    #[arg(required = true, num_args = 1.., value_name = "URLS")]
    pub urls: Vec<String>,
}

#[derive(Debug, Args, Clone)]
pub struct ScanPathArgs {
    /// Path to the project directory
    #[arg(long)]
    pub path: String,
}

use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub timeout_ms: Option<u64>,
    pub max_concurrent_requests: Option<usize>,
    pub monitor_interval_secs: Option<u64>,
    pub history_path: Option<String>,
    pub history: Option<bool>,
    pub load_tester: Option<LoadTesterConfig>,
    pub scanner: Option<ScannerConfig>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadTesterConfig {
    pub manifest_path: Option<String>,
    pub binary: Option<String>,
    pub cargo: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    pub program: Option<String>,
}

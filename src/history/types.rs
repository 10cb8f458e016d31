use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
    pub command: String,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub result: String,
}

impl HistoryEntry {
    #[must_use]
    pub fn now(command: impl Into<String>, params: Value, result: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            command: command.into(),
            params,
            result: result.into(),
        }
    }
}

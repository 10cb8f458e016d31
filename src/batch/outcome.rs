use serde_json::Value;

use crate::error::RequestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Timeout,
    Status,
    Transport,
}

impl From<&RequestError> for FailureKind {
    fn from(err: &RequestError) -> Self {
        match err {
            RequestError::InvalidUrl { .. } => FailureKind::InvalidUrl,
            RequestError::Timeout => FailureKind::Timeout,
            RequestError::Status { .. } => FailureKind::Status,
            RequestError::Other { .. } => FailureKind::Transport,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuccessRecord {
    pub url: String,
    pub body: Value,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub url: String,
    pub kind: FailureKind,
    pub message: String,
}

/// Result of one attempt against one URL.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    Success(SuccessRecord),
    Failure(FailureRecord),
}

impl RequestOutcome {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            RequestOutcome::Success(record) => &record.url,
            RequestOutcome::Failure(record) => &record.url,
        }
    }
}

/// Successes and failures in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResultSet {
    pub successes: Vec<SuccessRecord>,
    pub failures: Vec<FailureRecord>,
}

impl BatchResultSet {
    pub fn record(&mut self, outcome: RequestOutcome) {
        match outcome {
            RequestOutcome::Success(record) => self.successes.push(record),
            RequestOutcome::Failure(record) => self.failures.push(record),
        }
    }

    #[must_use]
    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.success_count().saturating_add(self.failure_count())
    }
}

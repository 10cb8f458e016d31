use serde_json::Value;

use crate::args::HttpMethod;
use crate::error::RequestError;
use crate::http::Executor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionCheck {
    Compatible { current: String },
    Mismatch {
        expected: String,
        current: Option<String>,
    },
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// GETs `<base>/backlog`.
///
/// # Errors
///
/// Returns the executor's classification of any failure.
pub async fn fetch_backlog(executor: &Executor, base_url: &str) -> Result<Value, RequestError> {
    executor
        .request(&endpoint(base_url, "backlog"), HttpMethod::Get, None)
        .await
}

/// GETs `<base>/version` and compares its `version` field with `expected`.
///
/// # Errors
///
/// Returns the executor's classification of any failure.
pub async fn check_version(
    executor: &Executor,
    base_url: &str,
    expected: &str,
) -> Result<VersionCheck, RequestError> {
    let body = executor
        .request(&endpoint(base_url, "version"), HttpMethod::Get, None)
        .await?;
    let current = match body.get("version") {
        Some(Value::String(version)) => Some(version.clone()),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    };

    Ok(match current {
        Some(current) if current == expected => VersionCheck::Compatible { current },
        current => VersionCheck::Mismatch {
            expected: expected.to_owned(),
            current,
        },
    })
}

/// Sends `method` to `url` with a bearer token and an optional JSON body.
///
/// # Errors
///
/// Returns the executor's classification of any failure.
pub async fn authenticated_call(
    executor: &Executor,
    url: &str,
    method: HttpMethod,
    body: Option<&Value>,
    token: &str,
) -> Result<Value, RequestError> {
    executor.authenticated(url, method, body, Some(token)).await
}

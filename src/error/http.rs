use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}

/// Classified failure of a single HTTP attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
    #[error("Request timed out")]
    Timeout,
    #[error("Request failed with status code {code}")]
    Status { code: u16 },
    #[error("{message}")]
    Other { message: String },
}

impl RequestError {
    #[must_use]
    pub fn other<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        if let Some(status) = err.status() {
            return Self::Status {
                code: status.as_u16(),
            };
        }
        Self::Other {
            message: err.to_string(),
        }
    }
}

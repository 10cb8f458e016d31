use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid JSON request body: {source}")]
    InvalidJsonBody {
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid HTTP method '{value}'. Use GET, POST, PUT, or PATCH.")]
    InvalidHttpMethod { value: String },
    #[error("API version must not be empty.")]
    ApiVersionEmpty,
    #[error("Bearer token must not be empty.")]
    TokenEmpty,
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("{message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

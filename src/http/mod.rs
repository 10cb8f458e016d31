//! URL validation and single-request execution.
mod executor;
mod transport;
mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use executor::{Executor, decode_body};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
pub use validate::{is_valid_url, with_api_version};

use std::time::Duration;

/// Fixed per-request deadline unless overridden by config.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);
pub const HTTP_OK: u16 = 200;

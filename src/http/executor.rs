use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use super::transport::{ApiRequest, Transport};
use super::validate::is_valid_url;
use crate::args::HttpMethod;
use crate::error::RequestError;

/// Performs single HTTP calls and decodes successful bodies.
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
}

impl Executor {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Issues one request and returns the decoded body of a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidUrl`] without touching the network when
    /// the URL is rejected, [`RequestError::Status`] for non-2xx responses, and
    /// the transport's classification for everything else.
    pub async fn request(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&Value>,
    ) -> Result<Value, RequestError> {
        self.execute(ApiRequest {
            method,
            url: url.to_owned(),
            body: body.cloned(),
            bearer_token: None,
        })
        .await
    }

    /// Like [`Executor::request`], but attaches `Authorization: Bearer` when a
    /// token is given and always sends a JSON body (`{}` when none is supplied).
    ///
    /// # Errors
    ///
    /// Same as [`Executor::request`].
    pub async fn authenticated(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Value, RequestError> {
        let body = body
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        self.execute(ApiRequest {
            method,
            url: url.to_owned(),
            body: Some(body),
            bearer_token: token.map(ToOwned::to_owned),
        })
        .await
    }

    async fn execute(&self, request: ApiRequest) -> Result<Value, RequestError> {
        if !is_valid_url(&request.url) {
            return Err(RequestError::InvalidUrl { url: request.url });
        }

        debug!(method = %request.method, url = %request.url, "Sending request");
        let url = request.url.clone();
        let response = self
            .transport
            .send(request)
            .await
            .inspect_err(|err| debug!("Error fetching data from API {}: {}", url, err))?;

        if !(200..300).contains(&response.status) {
            debug!(
                "Error fetching data from API {}: status {}",
                url, response.status
            );
            return Err(RequestError::Status {
                code: response.status,
            });
        }

        Ok(decode_body(&response.body))
    }
}

/// Decodes a response body as JSON, falling back to the raw text.
#[must_use]
pub fn decode_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

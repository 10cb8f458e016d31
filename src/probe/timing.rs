use std::time::Instant;

use chrono::{DateTime, Local};

use crate::args::HttpMethod;
use crate::error::RequestError;
use crate::http::Executor;
use crate::system::console::{Console, Tone};

const RESPONSE_TIME_MESSAGE: &str = "Response time:";
const ERROR_MESSAGE: &str = "Error checking response time";
const CLOCK_FORMAT: &str = "%H:%M:%S%.3f";

#[derive(Debug, Clone)]
pub struct ResponseTiming {
    pub url: String,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub elapsed_ms: u64,
}

/// Times one GET against `url`, wall clock from just before the request is
/// issued until the body has been read.
///
/// # Errors
///
/// Returns the executor's classification when the URL is invalid or the
/// request fails.
pub async fn measure_response_time(
    executor: &Executor,
    url: &str,
) -> Result<ResponseTiming, RequestError> {
    let started_at = Local::now();
    let start = Instant::now();
    executor.request(url, HttpMethod::Get, None).await?;
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    Ok(ResponseTiming {
        url: url.to_owned(),
        started_at,
        finished_at: Local::now(),
        elapsed_ms,
    })
}

pub fn report_response_time(console: &Console, result: &Result<ResponseTiming, RequestError>) {
    match result {
        Ok(timing) => console.out(
            Tone::Banner,
            format!(
                "{} Start time: {}, End time: {}, Duration: {} ms",
                RESPONSE_TIME_MESSAGE,
                timing.started_at.format(CLOCK_FORMAT),
                timing.finished_at.format(CLOCK_FORMAT),
                timing.elapsed_ms
            ),
        ),
        Err(RequestError::InvalidUrl { url }) => {
            console.err(Tone::Failure, format!("Invalid URL: {}", url));
        }
        Err(err) => console.err(Tone::Failure, format!("{}: {}", ERROR_MESSAGE, err)),
    }
}

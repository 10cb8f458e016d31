use std::time::Instant;

use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tracing::debug;

use super::outcome::{BatchResultSet, FailureKind, FailureRecord, RequestOutcome, SuccessRecord};
use crate::args::{HttpMethod, PositiveUsize};
use crate::http::Executor;

/// Default admission bound for batch requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 5;

pub struct BatchDispatcher {
    executor: Executor,
    max_concurrent: PositiveUsize,
}

impl BatchDispatcher {
    #[must_use]
    pub const fn new(executor: Executor, max_concurrent: PositiveUsize) -> Self {
        Self {
            executor,
            max_concurrent,
        }
    }

    /// GETs every URL once, chunk by chunk, and collects one outcome per URL.
    ///
    /// `on_outcome` sees each outcome as soon as its request settles.
    pub async fn dispatch<F>(&self, urls: &[String], mut on_outcome: F) -> BatchResultSet
    where
        F: FnMut(&RequestOutcome),
    {
        let mut results = BatchResultSet::default();

        for (index, chunk) in urls.chunks(self.max_concurrent.get()).enumerate() {
            debug!(chunk = index, size = chunk.len(), "Dispatching chunk");
            let mut pending: FuturesUnordered<_> =
                chunk.iter().map(|url| self.fetch(url)).collect();

            // Barrier: drain the whole chunk before admitting the next one.
            while let Some(outcome) = pending.next().await {
                on_outcome(&outcome);
                results.record(outcome);
            }
        }

        debug!(
            succeeded = results.success_count(),
            failed = results.failure_count(),
            "Batch finished"
        );
        results
    }

    async fn fetch(&self, url: &str) -> RequestOutcome {
        let start = Instant::now();
        let result = self.executor.request(url, HttpMethod::Get, None).await;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match result {
            Ok(body) => RequestOutcome::Success(SuccessRecord {
                url: url.to_owned(),
                body,
                elapsed_ms,
            }),
            Err(err) => {
                debug!("Request to {} failed: {}", url, err);
                RequestOutcome::Failure(FailureRecord {
                    url: url.to_owned(),
                    kind: FailureKind::from(&err),
                    message: err.to_string(),
                })
            }
        }
    }
}

//! Bounded-concurrency batch requests.
//!
//! URLs are split into chunks of at most `max_concurrent` entries. Each chunk
//! is fanned out concurrently and fully settled before the next one starts,
//! so no more than `max_concurrent` requests are ever in flight.
mod dispatcher;
mod outcome;
mod report;


pub use dispatcher::{BatchDispatcher, MAX_CONCURRENT_REQUESTS};
pub use outcome::{BatchResultSet, FailureKind, FailureRecord, RequestOutcome, SuccessRecord};
pub use report::{print_outcome, print_summary};

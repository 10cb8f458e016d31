//! Process-level plumbing: console output, logging, and shutdown signals.
pub mod console;
pub mod logger;
pub mod shutdown;

//! Append-only command history kept as a JSON array on disk.
mod report;
mod store;
mod types;


pub use report::print_history;
pub use store::HistoryStore;
pub use types::HistoryEntry;

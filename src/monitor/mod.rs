//! Periodic health monitoring of a single endpoint.
mod session;


pub use session::{
    ConsoleObserver, DEFAULT_MONITOR_INTERVAL, MonitorObserver, MonitorReport, MonitorSession,
    MonitorState,
};

mod app;
mod config;
mod history;
mod http;
mod tool;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use history::HistoryError;
pub use http::{HttpError, RequestError};
pub use tool::ToolError;
pub use validation::ValidationError;

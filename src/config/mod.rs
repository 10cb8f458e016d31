//! Configuration loading and resolution against CLI flags.
mod loader;
mod settings;
pub mod types;

#[cfg(test)]
mod tests;

pub use loader::{DEFAULT_CONFIG_FILES, load_config, load_config_file};
pub use settings::{Settings, resolve_settings};

//! Configuration
//!
//! Raw TOML structure plus a figment-based loader that merges defaults,
//! the global config file, the project file, and an explicit override.

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, ServerConfig};
pub use loader::{ConfigError, ConfigLoader};

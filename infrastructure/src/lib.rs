//! Infrastructure layer for the consultation service
//!
//! This crate contains adapters that implement the store ports defined in
//! the application layer, the startup seed data, and configuration file
//! loading.

pub mod config;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig, ServerConfig};
pub use seed::seed_demo_data;
pub use store::{InMemoryConsultationStore, InMemoryQuestionStore};

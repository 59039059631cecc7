//! Infrastructure layer for lunch-roulette
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigSource, FileConfig, FileHistoryConfig, FileLogConfig, FileOutputConfig,
    FileSelectionConfig, FileStorageConfig,
};
pub use logging::JsonlDecisionLogger;
pub use store::{InMemoryRecordStore, JsonFileRecordStore};

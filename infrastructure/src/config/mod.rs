//! Configuration file loading for lunch-roulette
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ROULETTE_*` environment variables (`ROULETTE_OUTPUT__FORMAT=json`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./roulette.toml` or `./.roulette.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/lunch-roulette/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileHistoryConfig, FileLogConfig, FileOutputConfig, FileSelectionConfig,
    FileStorageConfig,
};
pub use loader::{ConfigLoader, ConfigSource};

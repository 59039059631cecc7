//! Record store port
//!
//! The store is a flat key-value collaborator: each key holds the whole
//! collection as one JSON text. Implementations live in the infrastructure
//! layer.

use async_trait::async_trait;
use thiserror::Error;

/// The collections kept in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    People,
    Restaurants,
}

impl RecordKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKey::People => "people",
            RecordKey::Restaurants => "restaurants",
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised by a store adapter
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

impl StoreError {
    pub fn read(key: &str, message: impl std::fmt::Display) -> Self {
        Self::Read {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    pub fn write(key: &str, message: impl std::fmt::Display) -> Self {
        Self::Write {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

/// Key-value storage for record collections.
///
/// `get` returns `None` when the key has never been written. `set` replaces
/// the whole value. There is no locking: callers assume a single writer.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

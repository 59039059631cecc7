//! Record collections over the key-value store.
//!
//! Reads and writes always move a whole collection. Changes go through
//! [`commit`], which applies a mutation to a copy of the current snapshot
//! and hands the copy back only once the store has accepted it. Nothing
//! here guards against a second writer between the read and the write.

use crate::ports::record_store::{RecordKey, RecordStore, StoreError};
use roulette_domain::{DomainError, Person, RecordId, Restaurant, ValidationError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from loading or changing a record collection
#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("Storage read failed: {0}")]
    StorageReadFailed(#[source] StoreError),

    #[error("Stored {key} data is not valid: {source}")]
    CorruptData {
        key: RecordKey,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage write failed: {0}")]
    StorageWriteFailed(#[source] StoreError),

    #[error("Failed to encode {key}: {source}")]
    Encode {
        key: RecordKey,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    ValidationFailed(#[from] ValidationError),

    #[error("No {kind} with id '{id}'")]
    NotFound { kind: &'static str, id: String },

    #[error("More than one person is named '{name}'; select them by id")]
    AmbiguousName { name: String },

    #[error(transparent)]
    Selection(#[from] DomainError),
}

/// A record type that lives in its own store collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KEY: RecordKey;
    /// Singular noun used in messages
    const KIND: &'static str;

    fn id(&self) -> &RecordId;

    fn assign_id(&mut self, id: RecordId);

    /// Human-readable name for log lines
    fn label(&self) -> &str;
}

impl Record for Person {
    const KEY: RecordKey = RecordKey::People;
    const KIND: &'static str = "person";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Record for Restaurant {
    const KEY: RecordKey = RecordKey::Restaurants;
    const KIND: &'static str = "restaurant";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// Load a whole collection.
///
/// An absent key or an empty value is an empty collection. Records without
/// an id get a fresh one, and the repaired collection is written back so
/// the ids stay stable. If that write fails the load fails too: ids that
/// were never stored are never handed out.
pub async fn load_records<T, S>(store: &S) -> Result<Vec<T>, RecordsError>
where
    T: Record,
    S: RecordStore + ?Sized,
{
    let key = T::KEY;
    let text = store
        .get(key.as_str())
        .await
        .map_err(RecordsError::StorageReadFailed)?;

    let mut records: Vec<T> = match text.as_deref() {
        None | Some("") => Vec::new(),
        Some(text) => serde_json::from_str(text)
            .map_err(|source| RecordsError::CorruptData { key, source })?,
    };

    let mut repaired = 0;
    for record in records.iter_mut().filter(|r| r.id().is_blank()) {
        record.assign_id(RecordId::generate());
        repaired += 1;
    }

    if repaired > 0 {
        info!("Assigned ids to {} {} record(s) without one", repaired, key);
        write_snapshot(store, &records).await?;
    }

    debug!("Loaded {} {} record(s)", records.len(), key);
    Ok(records)
}

/// Apply `mutation` to a copy of `snapshot` and persist it.
///
/// Returns the new snapshot after the store accepted it. If the mutation
/// or the write fails, the error is returned and `snapshot` is untouched.
pub async fn commit<T, S, F>(store: &S, snapshot: &[T], mutation: F) -> Result<Vec<T>, RecordsError>
where
    T: Record,
    S: RecordStore + ?Sized,
    F: FnOnce(&mut Vec<T>) -> Result<(), RecordsError>,
{
    let mut next = snapshot.to_vec();
    mutation(&mut next)?;
    write_snapshot(store, &next).await?;
    Ok(next)
}

async fn write_snapshot<T, S>(store: &S, records: &[T]) -> Result<(), RecordsError>
where
    T: Record,
    S: RecordStore + ?Sized,
{
    let key = T::KEY;
    let text =
        serde_json::to_string(records).map_err(|source| RecordsError::Encode { key, source })?;
    store
        .set(key.as_str(), &text)
        .await
        .map_err(RecordsError::StorageWriteFailed)
}

//! File-backed record store.
//!
//! Key `k` maps to `<data_dir>/k.json`. A missing file reads as an absent
//! key. Writes go to a sibling temp file that is then renamed over the
//! target, so a crash mid-write leaves the previous value intact.

use async_trait::async_trait;
use roulette_application::ports::record_store::{RecordStore, StoreError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFileRecordStore {
    data_dir: PathBuf,
}

impl JsonFileRecordStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve the file for `key`. Keys are bare names; anything that could
    /// escape the data directory is refused.
    fn path_for(&self, key: &str) -> Option<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        valid.then(|| self.data_dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self
            .path_for(key)
            .ok_or_else(|| StoreError::read(key, "invalid key"))?;

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                debug!("Read {} bytes from {}", text.len(), path.display());
                Ok(Some(text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::read(key, format!("{}: {}", path.display(), e))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self
            .path_for(key)
            .ok_or_else(|| StoreError::write(key, "invalid key"))?;

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| StoreError::write(key, format!("{}: {}", self.data_dir.display(), e)))?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| StoreError::write(key, format!("{}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::write(key, format!("{}: {}", path.display(), e)))?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

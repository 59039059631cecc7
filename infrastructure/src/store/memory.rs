//! Process-local record store.

use async_trait::async_trait;
use roulette_application::ports::record_store::{RecordStore, StoreError};
use std::collections::HashMap;
use std::sync::RwLock;

/// Keeps every value in a map; nothing survives the process.
#[derive(Default)]
pub struct InMemoryRecordStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self
            .values
            .read()
            .map_err(|e| StoreError::read(key, e))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StoreError::write(key, e))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roulette_application::{ManageRecordsUseCase, RecordStore};
    use roulette_domain::NewPerson;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_absent_then_set() {
        let store = InMemoryRecordStore::new();
        assert_eq!(store.get("people").await.unwrap(), None);

        store.set("people", "[]").await.unwrap();
        assert_eq!(store.get("people").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_backs_record_use_cases() {
        let store = Arc::new(InMemoryRecordStore::new());
        let records = ManageRecordsUseCase::new(store.clone());

        records.add_person(NewPerson::new("Alice")).await.unwrap();
        records.add_person(NewPerson::new("Bob")).await.unwrap();

        let names: Vec<String> = records
            .list_people()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert!(store.get("people").await.unwrap().is_some());
    }
}

//! Manage Records use case
//!
//! Adding, removing and listing people and restaurants, plus resolving which
//! people are going.

use super::records::{Record, RecordsError, commit, load_records};
use crate::ports::record_store::RecordStore;
use roulette_domain::{
    NewPerson, NewRestaurant, Person, RecordId, Restaurant, select_participants,
};
use std::sync::Arc;
use tracing::info;

/// Use case for the two stored lists
pub struct ManageRecordsUseCase<S: RecordStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RecordStore + ?Sized> ManageRecordsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn list_people(&self) -> Result<Vec<Person>, RecordsError> {
        load_records(self.store.as_ref()).await
    }

    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, RecordsError> {
        load_records(self.store.as_ref()).await
    }

    /// Validate and append a person
    pub async fn add_person(&self, input: NewPerson) -> Result<Person, RecordsError> {
        let person = input.validate()?;
        self.add(person).await
    }

    /// Validate and append a restaurant
    pub async fn add_restaurant(&self, input: NewRestaurant) -> Result<Restaurant, RecordsError> {
        let restaurant = input.validate()?;
        self.add(restaurant).await
    }

    pub async fn remove_person(&self, id: &RecordId) -> Result<Person, RecordsError> {
        self.remove(id).await
    }

    pub async fn remove_restaurant(&self, id: &RecordId) -> Result<Restaurant, RecordsError> {
        self.remove(id).await
    }

    /// Resolve who is going.
    ///
    /// Each selector matches a person's id exactly, or their name ignoring
    /// case. A name shared by several people is rejected rather than
    /// guessed. The result keeps the stored order.
    pub async fn select_participants(
        &self,
        selectors: &[String],
    ) -> Result<Vec<Person>, RecordsError> {
        let people = self.list_people().await?;
        let ids = selectors
            .iter()
            .map(|selector| resolve_selector(&people, selector.trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(select_participants(&people, &ids)?)
    }

    async fn add<T: Record>(&self, record: T) -> Result<T, RecordsError> {
        let snapshot: Vec<T> = load_records(self.store.as_ref()).await?;
        let added = record.clone();
        commit(self.store.as_ref(), &snapshot, move |records| {
            records.push(record);
            Ok(())
        })
        .await?;
        info!("Added {} '{}' ({})", T::KIND, added.label(), added.id());
        Ok(added)
    }

    async fn remove<T: Record>(&self, id: &RecordId) -> Result<T, RecordsError> {
        let snapshot: Vec<T> = load_records(self.store.as_ref()).await?;
        let Some(position) = snapshot.iter().position(|r| r.id() == id) else {
            return Err(RecordsError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            });
        };
        let removed = snapshot[position].clone();
        commit(self.store.as_ref(), &snapshot, |records| {
            records.remove(position);
            Ok(())
        })
        .await?;
        info!("Removed {} '{}' ({})", T::KIND, removed.label(), id);
        Ok(removed)
    }
}

fn resolve_selector(people: &[Person], selector: &str) -> Result<RecordId, RecordsError> {
    if let Some(person) = people.iter().find(|p| p.id.as_str() == selector) {
        return Ok(person.id.clone());
    }
    let mut named = people.iter().filter(|p| p.name.eq_ignore_ascii_case(selector));
    match (named.next(), named.next()) {
        (Some(person), None) => Ok(person.id.clone()),
        (Some(_), Some(_)) => Err(RecordsError::AmbiguousName {
            name: selector.to_string(),
        }),
        // Unknown selectors are reported by the domain check
        (None, _) => Ok(RecordId::new(selector)),
    }
}

//! Quick Decision use case
//!
//! Draws one random person and one random restaurant from the stored lists.
//! No filters and no ballot.

use super::records::{RecordsError, load_records};
use crate::config::SelectionParams;
use crate::ports::decision_logger::{DecisionLogger, NoDecisionLogger, SessionEvent};
use crate::ports::record_store::RecordStore;
use roulette_domain::{DomainError, Person, QuickDecision, Restaurant, quick_decision};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum QuickDecisionError {
    #[error(transparent)]
    Records(#[from] RecordsError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct QuickDecisionUseCase<S: RecordStore + ?Sized> {
    store: Arc<S>,
    params: SelectionParams,
    logger: Arc<dyn DecisionLogger>,
}

impl<S: RecordStore + ?Sized> QuickDecisionUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            params: SelectionParams::default(),
            logger: Arc::new(NoDecisionLogger),
        }
    }

    pub fn with_params(mut self, params: SelectionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn DecisionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn execute(&self) -> Result<QuickDecision, QuickDecisionError> {
        let people: Vec<Person> = load_records(self.store.as_ref()).await?;
        let restaurants: Vec<Restaurant> = load_records(self.store.as_ref()).await?;

        let mut rng = self.params.rng();
        let drawn = quick_decision(&people, &restaurants, &mut rng)?;

        info!(
            "Quick decision: {} picks '{}'",
            drawn.person.name, drawn.restaurant.name
        );
        self.logger
            .log(SessionEvent::new("quick_decision", json!(drawn)));

        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::record_store::RecordKey;
    use crate::use_cases::records::test_support::MemoryStore;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CapturingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl DecisionLogger for CapturingLogger {
        fn log(&self, event: SessionEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn populated_store() -> MemoryStore {
        let store = MemoryStore::with_value(
            RecordKey::People,
            r#"[{"id":"p1","name":"Alice"},{"id":"p2","name":"Bob"}]"#,
        );
        store.values.lock().unwrap().insert(
            RecordKey::Restaurants.as_str().to_string(),
            r#"[{"id":"r1","name":"Noodle Hut","style":"Thai","price":"$","delivery":true,"area":"Old Town","rating":"4"}]"#
                .to_string(),
        );
        store
    }

    #[tokio::test]
    async fn test_draws_from_both_lists() {
        let logger = Arc::new(CapturingLogger::default());
        let use_case = QuickDecisionUseCase::new(Arc::new(populated_store()))
            .with_params(SelectionParams::default().with_seed(3))
            .with_logger(logger.clone());

        let drawn = use_case.execute().await.unwrap();

        assert!(["Alice", "Bob"].contains(&drawn.person.name.as_str()));
        assert_eq!(drawn.restaurant.name, "Noodle Hut");
        assert_eq!(drawn.restaurant.rating.stars(), 4);
        assert_eq!(*logger.events.lock().unwrap(), vec!["quick_decision"]);
    }

    #[tokio::test]
    async fn test_missing_restaurants() {
        let store = MemoryStore::with_value(RecordKey::People, r#"[{"id":"p1","name":"Alice"}]"#);
        let result = QuickDecisionUseCase::new(Arc::new(store)).execute().await;
        assert!(matches!(
            result,
            Err(QuickDecisionError::Domain(DomainError::MissingData))
        ));
    }

    #[tokio::test]
    async fn test_missing_people() {
        let result = QuickDecisionUseCase::new(Arc::new(MemoryStore::default()))
            .execute()
            .await;
        assert!(matches!(
            result,
            Err(QuickDecisionError::Domain(DomainError::MissingData))
        ));
    }
}

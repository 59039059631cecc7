//! Choose Restaurant use case
//!
//! Orchestrates one selection session: filter, draw a candidate, run the
//! ballot, and repeat with the next candidate after every rejection until
//! the group agrees or nothing eligible is left.

use super::records::{RecordsError, load_records};
use crate::config::SelectionParams;
use crate::ports::decision_logger::{DecisionLogger, NoDecisionLogger, SessionEvent};
use crate::ports::record_store::RecordStore;
use crate::ports::selection_notifier::{NoSelectionNotifier, SelectionNotifier};
use crate::ports::vote_prompt::{VotePort, VotePortError};
use roulette_domain::{
    Decision, DomainError, FilterCriteria, Person, Restaurant, SelectionSession, VoteOutcome,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while choosing
#[derive(Error, Debug)]
pub enum ChooseRestaurantError {
    #[error(transparent)]
    Records(#[from] RecordsError),

    #[error(transparent)]
    Selection(#[from] DomainError),

    #[error("Vote prompt failed: {0}")]
    VotePromptFailed(#[from] VotePortError),
}

impl ChooseRestaurantError {
    /// Whether every eligible restaurant was rejected or filtered out
    pub fn is_exhausted(&self) -> bool {
        matches!(self, ChooseRestaurantError::Selection(e) if e.is_exhausted())
    }
}

/// Input for the ChooseRestaurant use case
#[derive(Debug, Clone)]
pub struct ChooseRestaurantInput {
    /// Who is going, in voting order
    pub participants: Vec<Person>,
    /// Filters applied before the first draw
    pub criteria: FilterCriteria,
}

impl ChooseRestaurantInput {
    pub fn new(participants: Vec<Person>) -> Self {
        Self {
            participants,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }
}

/// Result of a successful session
#[derive(Debug, Clone, Serialize)]
pub struct ChooseRestaurantOutput {
    pub decision: Decision,
    /// Number of ballots held, including the accepted one
    pub rounds: usize,
    /// Candidates turned down along the way, in order
    pub rejected: Vec<Restaurant>,
}

/// Use case for running a selection session
pub struct ChooseRestaurantUseCase<S: RecordStore + ?Sized> {
    store: Arc<S>,
    params: SelectionParams,
    logger: Arc<dyn DecisionLogger>,
}

impl<S: RecordStore + ?Sized> ChooseRestaurantUseCase<S> {
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

    /// Execute the use case without notifications
    pub async fn execute(
        &self,
        input: ChooseRestaurantInput,
        votes: &dyn VotePort,
    ) -> Result<ChooseRestaurantOutput, ChooseRestaurantError> {
        self.execute_with_notifier(input, votes, &NoSelectionNotifier)
            .await
    }

    /// Execute the use case, reporting each step to `notifier`
    pub async fn execute_with_notifier(
        &self,
        input: ChooseRestaurantInput,
        votes: &dyn VotePort,
        notifier: &dyn SelectionNotifier,
    ) -> Result<ChooseRestaurantOutput, ChooseRestaurantError> {
        let restaurants: Vec<Restaurant> = load_records(self.store.as_ref()).await?;
        let mut session = SelectionSession::new(restaurants, input.participants)?;

        info!(
            "Choosing among {} restaurants for {} participants",
            session.total(),
            session.participants().len()
        );

        if input.criteria.is_active() {
            let matched = session.apply_filters(input.criteria)?;
            debug!("Filters matched {} of {}", matched, session.total());
            notifier.on_filters_applied(matched, session.total());
        }

        let mut rng = self.params.rng();
        let mut rejected = Vec::new();
        let mut rounds = 0;

        loop {
            let remaining = session.available().len();
            let candidate = session.pick(&mut rng)?.clone();
            rounds += 1;

            info!("Round {}: drew '{}'", rounds, candidate.name);
            notifier.on_candidate_picked(&candidate, remaining);
            self.logger.log(SessionEvent::new(
                "candidate_picked",
                json!({ "round": rounds, "restaurant": candidate }),
            ));

            loop {
                let voter = session
                    .ballot()
                    .current_voter()
                    .cloned()
                    .ok_or(DomainError::BallotNotOpen)?;
                let accept = votes.request_vote(session.ballot()).await?;
                notifier.on_vote_cast(&voter, accept);

                match session.vote(accept)? {
                    VoteOutcome::NextVoter { voter_index } => {
                        debug!("{} accepted, next voter #{}", voter.name, voter_index);
                    }
                    VoteOutcome::Accepted(decision) => {
                        info!(
                            "'{}' accepted by all {} participants",
                            decision.restaurant.name,
                            decision.participants.len()
                        );
                        notifier.on_decision(&decision);
                        self.logger.log(SessionEvent::new(
                            "decision_confirmed",
                            json!({ "rounds": rounds, "decision": decision }),
                        ));
                        return Ok(ChooseRestaurantOutput {
                            decision,
                            rounds,
                            rejected,
                        });
                    }
                    VoteOutcome::Rejected {
                        candidate,
                        rejected_by,
                    } => {
                        info!("'{}' rejected by {}", candidate.name, rejected_by.name);
                        notifier.on_candidate_rejected(&candidate, &rejected_by);
                        self.logger.log(SessionEvent::new(
                            "candidate_rejected",
                            json!({
                                "round": rounds,
                                "restaurant": candidate,
                                "rejected_by": rejected_by,
                            }),
                        ));
                        rejected.push(candidate);
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::record_store::RecordKey;
    use crate::ports::vote_prompt::{AutoAcceptVotes, AutoRejectVotes};
    use crate::use_cases::records::test_support::MemoryStore;
    use async_trait::async_trait;
    use roulette_domain::{Ballot, RecordId};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    const RESTAURANTS: &str = r#"[
        {"id":"r1","name":"Pizza Place","style":"Italian","price":"$$","delivery":true,"area":"Downtown","rating":4},
        {"id":"r2","name":"Sushi Bar","style":"Japanese","price":"$$$","delivery":false,"area":"Midtown","rating":5},
        {"id":"r3","name":"Burger Joint","style":"American","price":"$","delivery":true,"area":"Uptown","rating":3}
    ]"#;

    /// Replays a fixed sequence of votes and records who was asked.
    struct ScriptedVotes {
        script: Mutex<VecDeque<bool>>,
        asked: Mutex<Vec<String>>,
    }

    impl ScriptedVotes {
        fn new(script: &[bool]) -> Self {
            Self {
                script: Mutex::new(script.iter().copied().collect()),
                asked: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VotePort for ScriptedVotes {
        async fn request_vote(&self, ballot: &Ballot) -> Result<bool, VotePortError> {
            let voter = ballot.current_voter().map(|p| p.name.clone()).unwrap_or_default();
            self.asked.lock().unwrap().push(voter);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .ok_or(VotePortError::Closed)
        }
    }

    /// Captures rejections for assertions.
    #[derive(Default)]
    struct RecordingNotifier {
        events: Mutex<Vec<String>>,
    }

    impl SelectionNotifier for RecordingNotifier {
        fn on_filters_applied(&self, matched: usize, total: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("filters {}/{}", matched, total));
        }

        fn on_candidate_rejected(&self, candidate: &Restaurant, by: &Person) {
            self.events
                .lock()
                .unwrap()
                .push(format!("rejected {} by {}", candidate.id, by.name));
        }

        fn on_decision(&self, decision: &Decision) {
            self.events
                .lock()
                .unwrap()
                .push(format!("decided {}", decision.restaurant.id));
        }
    }

    fn alice_and_bob() -> Vec<Person> {
        vec![Person::new("a", "Alice"), Person::new("b", "Bob")]
    }

    fn use_case() -> ChooseRestaurantUseCase<MemoryStore> {
        let store = MemoryStore::with_value(RecordKey::Restaurants, RESTAURANTS);
        ChooseRestaurantUseCase::new(Arc::new(store))
            .with_params(SelectionParams::default().with_seed(17))
    }

    #[tokio::test]
    async fn test_everyone_accepts_first_candidate() {
        let output = use_case()
            .execute(ChooseRestaurantInput::new(alice_and_bob()), &AutoAcceptVotes)
            .await
            .unwrap();

        assert_eq!(output.rounds, 1);
        assert!(output.rejected.is_empty());
        assert_eq!(output.decision.participants, alice_and_bob());
    }

    #[tokio::test]
    async fn test_rejection_moves_to_a_new_candidate() {
        // Alice accepts, Bob rejects; then both accept the next draw
        let votes = ScriptedVotes::new(&[true, false, true, true]);
        let notifier = RecordingNotifier::default();

        let output = use_case()
            .execute_with_notifier(ChooseRestaurantInput::new(alice_and_bob()), &votes, &notifier)
            .await
            .unwrap();

        assert_eq!(output.rounds, 2);
        assert_eq!(output.rejected.len(), 1);
        assert_ne!(output.rejected[0].id, output.decision.restaurant.id);
        assert_eq!(
            *votes.asked.lock().unwrap(),
            vec!["Alice", "Bob", "Alice", "Bob"]
        );

        let events = notifier.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].starts_with("rejected ") && events[0].ends_with(" by Bob"));
        assert!(events[1].starts_with("decided "));
    }

    #[tokio::test]
    async fn test_first_reject_skips_remaining_voters() {
        let votes = ScriptedVotes::new(&[false, true, true]);
        let output = use_case()
            .execute(ChooseRestaurantInput::new(alice_and_bob()), &votes)
            .await
            .unwrap();

        assert_eq!(output.rounds, 2);
        assert_eq!(
            *votes.asked.lock().unwrap(),
            vec!["Alice", "Alice", "Bob"]
        );
    }

    #[tokio::test]
    async fn test_all_rejected_exhausts_candidates() {
        let result = use_case()
            .execute(ChooseRestaurantInput::new(alice_and_bob()), &AutoRejectVotes)
            .await;

        let err = result.unwrap_err();
        assert!(err.is_exhausted());
    }

    #[tokio::test]
    async fn test_filters_limit_candidates() {
        let notifier = RecordingNotifier::default();
        let input = ChooseRestaurantInput::new(alice_and_bob())
            .with_criteria(FilterCriteria::new().with_min_rating(5));

        let output = use_case()
            .execute_with_notifier(input, &AutoAcceptVotes, &notifier)
            .await
            .unwrap();

        assert_eq!(output.decision.restaurant.id, RecordId::new("r2"));
        assert_eq!(notifier.events.lock().unwrap()[0], "filters 1/3");
    }

    #[tokio::test]
    async fn test_filters_matching_nothing() {
        let input = ChooseRestaurantInput::new(alice_and_bob())
            .with_criteria(FilterCriteria::new().with_style("ethiopian"));
        let result = use_case().execute(input, &AutoAcceptVotes).await;
        assert!(result.unwrap_err().is_exhausted());
    }

    #[tokio::test]
    async fn test_closed_prompt_ends_session() {
        let votes = ScriptedVotes::new(&[true]);
        let result = use_case()
            .execute(ChooseRestaurantInput::new(alice_and_bob()), &votes)
            .await;
        assert!(matches!(
            result,
            Err(ChooseRestaurantError::VotePromptFailed(VotePortError::Closed))
        ));
    }

    #[tokio::test]
    async fn test_requires_participants() {
        let result = use_case()
            .execute(ChooseRestaurantInput::new(vec![]), &AutoAcceptVotes)
            .await;
        assert!(matches!(
            result,
            Err(ChooseRestaurantError::Selection(
                DomainError::NoParticipantsSelected
            ))
        ));
    }

    #[tokio::test]
    async fn test_read_failure_is_terminal() {
        let store = MemoryStore {
            fail_reads: true,
            ..Default::default()
        };
        let result = ChooseRestaurantUseCase::new(Arc::new(store))
            .execute(ChooseRestaurantInput::new(alice_and_bob()), &AutoAcceptVotes)
            .await;
        assert!(matches!(
            result,
            Err(ChooseRestaurantError::Records(
                RecordsError::StorageReadFailed(_)
            ))
        ));
    }
}

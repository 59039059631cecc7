//! Ballot state machine

use crate::core::error::DomainError;
use crate::core::id::RecordId;
use crate::people::Person;
use crate::restaurant::Restaurant;
use crate::selection::Decision;
use serde::{Deserialize, Serialize};

/// Where a ballot currently stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallotState {
    /// No candidate is being voted on
    #[default]
    Idle,
    /// Waiting for the participant at `voter_index`
    AwaitingVote { voter_index: usize },
    /// Everyone accepted the candidate
    Accepted,
    /// Somebody rejected the candidate
    Rejected,
}

impl BallotState {
    pub fn is_open(&self) -> bool {
        matches!(self, BallotState::AwaitingVote { .. })
    }
}

impl std::fmt::Display for BallotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BallotState::Idle => write!(f, "Idle"),
            BallotState::AwaitingVote { voter_index } => {
                write!(f, "AwaitingVote({})", voter_index)
            }
            BallotState::Accepted => write!(f, "Accepted"),
            BallotState::Rejected => write!(f, "Rejected"),
        }
    }
}

/// What a single vote led to
#[derive(Debug, Clone, PartialEq)]
pub enum VoteOutcome {
    /// The next participant is up
    NextVoter { voter_index: usize },
    /// The last participant accepted; the candidate is confirmed
    Accepted(Decision),
    /// The candidate was turned down
    Rejected {
        candidate: Restaurant,
        rejected_by: Person,
    },
}

/// One candidate, voted on by each participant in order.
///
/// # Example
///
/// ```
/// use roulette_domain::{Ballot, BallotState, Person, Restaurant, PriceTier, Rating, RecordId};
///
/// let pizza = Restaurant {
///     id: RecordId::new("pizza"),
///     name: "Pizza Place".into(),
///     style: "Italian".into(),
///     price: PriceTier::Two,
///     delivery: true,
///     area: "Downtown".into(),
///     rating: Rating::new(4).unwrap(),
/// };
/// let people = vec![Person::new("1", "Alice"), Person::new("2", "Bob")];
///
/// let mut ballot = Ballot::new();
/// ballot.start(pizza, people).unwrap();
/// ballot.vote(true).unwrap();
/// assert_eq!(ballot.state(), BallotState::AwaitingVote { voter_index: 1 });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ballot {
    state: BallotState,
    candidate: Option<Restaurant>,
    participants: Vec<Person>,
    accepted_ids: Vec<RecordId>,
}

impl Ballot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the ballot for a candidate.
    ///
    /// Allowed from any state except an open ballot. Clears the accepted
    /// voters from any previous round.
    pub fn start(
        &mut self,
        candidate: Restaurant,
        participants: Vec<Person>,
    ) -> Result<(), DomainError> {
        if self.state.is_open() {
            return Err(DomainError::BallotInProgress);
        }
        if participants.is_empty() {
            return Err(DomainError::NoParticipantsSelected);
        }

        self.candidate = Some(candidate);
        self.participants = participants;
        self.accepted_ids.clear();
        self.state = BallotState::AwaitingVote { voter_index: 0 };
        Ok(())
    }

    /// Record the current participant's vote.
    pub fn vote(&mut self, accept: bool) -> Result<VoteOutcome, DomainError> {
        let BallotState::AwaitingVote { voter_index } = self.state else {
            return Err(DomainError::BallotNotOpen);
        };
        let (Some(candidate), Some(voter)) =
            (self.candidate.as_ref(), self.participants.get(voter_index))
        else {
            return Err(DomainError::BallotNotOpen);
        };

        if !accept {
            let outcome = VoteOutcome::Rejected {
                candidate: candidate.clone(),
                rejected_by: voter.clone(),
            };
            self.accepted_ids.clear();
            self.state = BallotState::Rejected;
            return Ok(outcome);
        }

        self.accepted_ids.push(voter.id.clone());

        if voter_index + 1 == self.participants.len() {
            self.state = BallotState::Accepted;
            Ok(VoteOutcome::Accepted(Decision::new(
                candidate.clone(),
                self.participants.clone(),
            )))
        } else {
            let next = voter_index + 1;
            self.state = BallotState::AwaitingVote { voter_index: next };
            Ok(VoteOutcome::NextVoter { voter_index: next })
        }
    }

    pub fn state(&self) -> BallotState {
        self.state
    }

    pub fn candidate(&self) -> Option<&Restaurant> {
        self.candidate.as_ref()
    }

    pub fn participants(&self) -> &[Person] {
        &self.participants
    }

    /// The participant whose turn it is, if the ballot is open
    pub fn current_voter(&self) -> Option<&Person> {
        match self.state {
            BallotState::AwaitingVote { voter_index } => self.participants.get(voter_index),
            _ => None,
        }
    }

    pub fn accepted_ids(&self) -> &[RecordId] {
        &self.accepted_ids
    }

    /// Participants who have accepted so far, in voting order
    pub fn accepted_voters(&self) -> impl Iterator<Item = &Person> {
        self.participants
            .iter()
            .filter(|p| self.accepted_ids.contains(&p.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::{PriceTier, Rating};

    fn pizza_place() -> Restaurant {
        Restaurant {
            id: RecordId::new("pizza-place"),
            name: "Pizza Place".to_string(),
            style: "Italian".to_string(),
            price: PriceTier::Two,
            delivery: true,
            area: "Downtown".to_string(),
            rating: Rating::new(4).unwrap(),
        }
    }

    fn group(n: usize) -> Vec<Person> {
        (0..n)
            .map(|i| Person::new(format!("p{}", i), format!("Person {}", i)))
            .collect()
    }

    #[test]
    fn test_start_moves_to_first_voter() {
        let mut ballot = Ballot::new();
        assert_eq!(ballot.state(), BallotState::Idle);

        ballot.start(pizza_place(), group(3)).unwrap();
        assert_eq!(ballot.state(), BallotState::AwaitingVote { voter_index: 0 });
        assert_eq!(ballot.current_voter().unwrap().name, "Person 0");
        assert!(ballot.accepted_ids().is_empty());
    }

    #[test]
    fn test_start_requires_participants() {
        let mut ballot = Ballot::new();
        assert_eq!(
            ballot.start(pizza_place(), vec![]),
            Err(DomainError::NoParticipantsSelected)
        );
        assert_eq!(ballot.state(), BallotState::Idle);
    }

    #[test]
    fn test_start_refused_while_open() {
        let mut ballot = Ballot::new();
        ballot.start(pizza_place(), group(2)).unwrap();
        assert_eq!(
            ballot.start(pizza_place(), group(2)),
            Err(DomainError::BallotInProgress)
        );
    }

    #[test]
    fn test_vote_refused_when_not_open() {
        let mut ballot = Ballot::new();
        assert_eq!(ballot.vote(true), Err(DomainError::BallotNotOpen));

        ballot.start(pizza_place(), group(1)).unwrap();
        ballot.vote(false).unwrap();
        assert_eq!(ballot.vote(true), Err(DomainError::BallotNotOpen));
    }

    #[test]
    fn test_all_accept_for_any_group_size() {
        for n in 1..=6 {
            let people = group(n);
            let mut ballot = Ballot::new();
            ballot.start(pizza_place(), people.clone()).unwrap();

            let mut last = None;
            for _ in 0..n {
                last = Some(ballot.vote(true).unwrap());
            }

            assert_eq!(ballot.state(), BallotState::Accepted);
            let expected: Vec<RecordId> = people.iter().map(|p| p.id.clone()).collect();
            assert_eq!(ballot.accepted_ids(), expected.as_slice());
            match last {
                Some(VoteOutcome::Accepted(decision)) => {
                    assert_eq!(decision.restaurant.id.as_str(), "pizza-place");
                    assert_eq!(decision.participants, people);
                }
                other => panic!("expected acceptance, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_single_reject_at_any_index_ends_ballot() {
        for n in 1..=5 {
            for reject_at in 0..n {
                let mut ballot = Ballot::new();
                ballot.start(pizza_place(), group(n)).unwrap();

                for _ in 0..reject_at {
                    ballot.vote(true).unwrap();
                }
                let outcome = ballot.vote(false).unwrap();

                assert_eq!(ballot.state(), BallotState::Rejected);
                assert!(ballot.accepted_ids().is_empty());
                match outcome {
                    VoteOutcome::Rejected {
                        candidate,
                        rejected_by,
                    } => {
                        assert_eq!(candidate.name, "Pizza Place");
                        assert_eq!(rejected_by.id.as_str(), format!("p{}", reject_at));
                    }
                    other => panic!("expected rejection, got {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_accepted_voters_tracks_progress() {
        let mut ballot = Ballot::new();
        ballot.start(pizza_place(), group(3)).unwrap();
        ballot.vote(true).unwrap();
        ballot.vote(true).unwrap();

        let names: Vec<_> = ballot.accepted_voters().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Person 0", "Person 1"]);
        assert_eq!(ballot.current_voter().unwrap().name, "Person 2");
    }

    #[test]
    fn test_restart_after_rejection_clears_accepts() {
        let mut ballot = Ballot::new();
        ballot.start(pizza_place(), group(2)).unwrap();
        ballot.vote(true).unwrap();
        ballot.vote(false).unwrap();

        ballot.start(pizza_place(), group(2)).unwrap();
        assert_eq!(ballot.state(), BallotState::AwaitingVote { voter_index: 0 });
        assert!(ballot.accepted_ids().is_empty());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(
            BallotState::AwaitingVote { voter_index: 1 }.to_string(),
            "AwaitingVote(1)"
        );
        assert!(!BallotState::Accepted.is_open());
        assert!(!BallotState::Idle.is_open());
    }
}

//! Selection session state
//!
//! Everything a "choose for me" flow needs to remember between user inputs
//! lives here, owned by the session rather than by whatever drives it.

use crate::ballot::{Ballot, VoteOutcome};
use crate::core::error::DomainError;
use crate::core::id::RecordId;
use crate::filter::FilterCriteria;
use crate::people::Person;
use crate::restaurant::Restaurant;
use crate::selection::picker::CandidatePicker;
use rand::Rng;
use std::collections::HashSet;

/// One selection session for a fixed group of participants.
///
/// Invariants:
/// - `filtered` is always `criteria` applied to `restaurants`
/// - the rejection set only grows until filters change
/// - no filter change or new pick is accepted while a ballot is open
#[derive(Debug, Clone)]
pub struct SelectionSession {
    restaurants: Vec<Restaurant>,
    participants: Vec<Person>,
    criteria: FilterCriteria,
    filtered: Vec<Restaurant>,
    rejected: HashSet<RecordId>,
    ballot: Ballot,
}

impl SelectionSession {
    /// Start a session over the full restaurant list with no filters.
    pub fn new(
        restaurants: Vec<Restaurant>,
        participants: Vec<Person>,
    ) -> Result<Self, DomainError> {
        if participants.is_empty() {
            return Err(DomainError::NoParticipantsSelected);
        }
        Ok(Self {
            filtered: restaurants.clone(),
            restaurants,
            participants,
            criteria: FilterCriteria::default(),
            rejected: HashSet::new(),
            ballot: Ballot::new(),
        })
    }

    /// Replace the filter criteria and clear the rejection set.
    ///
    /// Returns the number of restaurants that match.
    pub fn apply_filters(&mut self, criteria: FilterCriteria) -> Result<usize, DomainError> {
        self.ensure_no_open_ballot()?;
        self.filtered = criteria.apply(&self.restaurants);
        self.criteria = criteria;
        self.rejected.clear();
        Ok(self.filtered.len())
    }

    /// Drop all filters and clear the rejection set.
    pub fn reset_filters(&mut self) -> Result<(), DomainError> {
        self.apply_filters(FilterCriteria::default()).map(|_| ())
    }

    /// Pick a random eligible restaurant and open a ballot for it.
    pub fn pick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Restaurant, DomainError> {
        self.ensure_no_open_ballot()?;
        let candidate = CandidatePicker::pick(&self.filtered, &self.rejected, rng)?.clone();
        self.ballot.start(candidate, self.participants.clone())?;
        self.ballot.candidate().ok_or(DomainError::BallotNotOpen)
    }

    /// Cast the current participant's vote on the open ballot.
    ///
    /// A rejection adds the candidate to the session's rejection set.
    pub fn vote(&mut self, accept: bool) -> Result<VoteOutcome, DomainError> {
        let outcome = self.ballot.vote(accept)?;
        if let VoteOutcome::Rejected { candidate, .. } = &outcome {
            self.rejected.insert(candidate.id.clone());
        }
        Ok(outcome)
    }

    /// Eligible restaurants: filtered and not yet rejected
    pub fn available(&self) -> Vec<&Restaurant> {
        CandidatePicker::eligible(&self.filtered, &self.rejected)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filtered(&self) -> &[Restaurant] {
        &self.filtered
    }

    pub fn total(&self) -> usize {
        self.restaurants.len()
    }

    pub fn participants(&self) -> &[Person] {
        &self.participants
    }

    pub fn rejected_ids(&self) -> &HashSet<RecordId> {
        &self.rejected
    }

    pub fn ballot(&self) -> &Ballot {
        &self.ballot
    }

    fn ensure_no_open_ballot(&self) -> Result<(), DomainError> {
        if self.ballot.state().is_open() {
            Err(DomainError::BallotInProgress)
        } else {
            Ok(())
        }
    }
}

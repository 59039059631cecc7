//! Random candidate picking

use crate::core::error::DomainError;
use crate::core::id::RecordId;
use crate::restaurant::Restaurant;
use rand::Rng;
use std::collections::HashSet;

/// Picks a candidate uniformly among restaurants that are still eligible.
pub struct CandidatePicker;

impl CandidatePicker {
    /// Restaurants in `filtered` that have not been rejected, in order
    pub fn eligible<'a>(
        filtered: &'a [Restaurant],
        rejected: &HashSet<RecordId>,
    ) -> Vec<&'a Restaurant> {
        filtered
            .iter()
            .filter(|r| !rejected.contains(&r.id))
            .collect()
    }

    /// Choose one eligible restaurant, each with equal probability.
    pub fn pick<'a, R: Rng + ?Sized>(
        filtered: &'a [Restaurant],
        rejected: &HashSet<RecordId>,
        rng: &mut R,
    ) -> Result<&'a Restaurant, DomainError> {
        let eligible = Self::eligible(filtered, rejected);
        if eligible.is_empty() {
            return Err(DomainError::NoCandidatesAvailable);
        }
        let index = rng.random_range(0..eligible.len());
        Ok(eligible[index])
    }
}

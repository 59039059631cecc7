//! Decision outcomes

use crate::core::error::DomainError;
use crate::people::Person;
use crate::restaurant::Restaurant;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A restaurant every participant accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub restaurant: Restaurant,
    pub participants: Vec<Person>,
    pub decided_at: DateTime<Utc>,
}

impl Decision {
    pub fn new(restaurant: Restaurant, participants: Vec<Person>) -> Self {
        Self {
            restaurant,
            participants,
            decided_at: Utc::now(),
        }
    }

    /// Comma-separated participant names
    pub fn participant_names(&self) -> String {
        self.participants
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One person and one restaurant, drawn independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickDecision {
    pub person: Person,
    pub restaurant: Restaurant,
}

/// Draw a random person and a random restaurant from the full lists.
///
/// No filtering and no ballot; both lists must be non-empty.
pub fn quick_decision<R: Rng + ?Sized>(
    people: &[Person],
    restaurants: &[Restaurant],
    rng: &mut R,
) -> Result<QuickDecision, DomainError> {
    if people.is_empty() || restaurants.is_empty() {
        return Err(DomainError::MissingData);
    }

    let person = people[rng.random_range(0..people.len())].clone();
    let restaurant = restaurants[rng.random_range(0..restaurants.len())].clone();
    Ok(QuickDecision { person, restaurant })
}

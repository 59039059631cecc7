//! Domain error types

use thiserror::Error;

/// A single field-level problem with a person or restaurant entry.
///
/// The messages are shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Name must start with a capital letter and cannot contain numbers")]
    InvalidPersonName,

    #[error("Style/Cuisine cannot contain numbers")]
    StyleContainsDigits,

    #[error("Area cannot consist only of numbers")]
    AreaDigitsOnly,

    #[error("Area must be at least {min} characters, please provide a more detailed address")]
    AreaTooShort { min: usize },

    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),

    #[error("Rating must be a whole number from 1 to 5, got '{0}'")]
    InvalidRating(String),

    #[error("Unknown price tier '{0}' (expected one of $, $$, $$$, $$$$, $$$$$)")]
    UnknownPriceTier(String),
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No available restaurants match the criteria or all have been rejected in this session")]
    NoCandidatesAvailable,

    #[error("Please select at least one person")]
    NoParticipantsSelected,

    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    #[error("Please add people and restaurants first")]
    MissingData,

    #[error("No ballot is waiting for a vote")]
    BallotNotOpen,

    #[error("A ballot is already in progress")]
    BallotInProgress,
}

impl DomainError {
    /// Whether the caller can recover by adjusting filters or clearing
    /// the session
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DomainError::NoCandidatesAvailable)
    }
}

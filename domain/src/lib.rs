//! Domain layer for lunch-roulette
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Records
//!
//! Two flat collections are kept: [`Person`] and [`Restaurant`]. Both are
//! created once, never mutated, and removed by id.
//!
//! ## Selection
//!
//! A [`SelectionSession`] narrows the restaurant list with
//! [`FilterCriteria`], picks a random candidate that has not been rejected
//! yet, and runs a [`Ballot`] in which every participant votes in turn.
//!
//! - **Any reject** ends the ballot and excludes the candidate for the rest
//!   of the session
//! - **All accept** confirms the candidate as the group's [`Decision`]

pub mod ballot;
pub mod config;
pub mod core;
pub mod filter;
pub mod people;
pub mod restaurant;
pub mod selection;

// Re-export commonly used types
pub use ballot::{Ballot, BallotState, VoteOutcome};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat};
pub use core::{
    error::{DomainError, ValidationError},
    id::RecordId,
};
pub use filter::FilterCriteria;
pub use people::{NewPerson, Person, select_participants};
pub use restaurant::{NewRestaurant, PriceTier, Rating, Restaurant};
pub use selection::{
    CandidatePicker, Decision, QuickDecision, SelectionSession, quick_decision,
};

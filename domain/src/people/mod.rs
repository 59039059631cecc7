//! People domain.
//!
//! - [`entities::Person`]: someone who may join a meal
//! - [`entities::NewPerson`]: unvalidated input for adding a person
//! - [`participants::select_participants`]: resolve who is going

pub mod entities;
pub mod participants;

pub use entities::{NewPerson, Person};
pub use participants::select_participants;

//! Use cases (application services)

pub mod choose_restaurant;
pub mod manage_records;
pub mod quick_decision;
pub mod records;

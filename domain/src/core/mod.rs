//! Core domain concepts shared across all subdomains.
//!
//! - [`id::RecordId`]: opaque identifier carried by every stored record
//! - [`error::DomainError`]: domain-level errors
//! - [`error::ValidationError`]: field-level input problems

pub mod error;
pub mod id;

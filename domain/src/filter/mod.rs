//! Restaurant filtering.
//!
//! [`FilterCriteria`] is ephemeral: it lives in a selection session and is
//! never persisted.

mod criteria;

pub use criteria::FilterCriteria;

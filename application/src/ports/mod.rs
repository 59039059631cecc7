//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod decision_logger;
pub mod record_store;
pub mod selection_notifier;
pub mod vote_prompt;

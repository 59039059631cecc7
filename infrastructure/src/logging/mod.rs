//! Logging infrastructure: structured decision history.
//!
//! Provides [`JsonlDecisionLogger`], a JSONL file writer that implements
//! the [`DecisionLogger`](roulette_application::DecisionLogger) port.

mod jsonl_history;

pub use jsonl_history::JsonlDecisionLogger;

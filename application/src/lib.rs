//! Application layer for lunch-roulette
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SelectionParams;
pub use ports::{
    decision_logger::{DecisionLogger, NoDecisionLogger, SessionEvent},
    record_store::{RecordKey, RecordStore, StoreError},
    selection_notifier::{NoSelectionNotifier, SelectionNotifier},
    vote_prompt::{AutoAcceptVotes, AutoRejectVotes, VotePort, VotePortError},
};
pub use use_cases::choose_restaurant::{
    ChooseRestaurantError, ChooseRestaurantInput, ChooseRestaurantOutput,
    ChooseRestaurantUseCase,
};
pub use use_cases::manage_records::ManageRecordsUseCase;
pub use use_cases::quick_decision::{QuickDecisionError, QuickDecisionUseCase};
pub use use_cases::records::{Record, RecordsError, commit, load_records};

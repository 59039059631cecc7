//! Selection domain.
//!
//! - [`picker::CandidatePicker`]: uniform random choice among eligible restaurants
//! - [`session::SelectionSession`]: explicit state of one "choose for me" session
//! - [`decision::Decision`]: the confirmed outcome of a ballot
//! - [`decision::quick_decision`]: one random person and one random restaurant

pub mod decision;
pub mod picker;
pub mod session;

pub use decision::{Decision, QuickDecision, quick_decision};
pub use picker::CandidatePicker;
pub use session::SelectionSession;

//! Selection notification port
//!
//! Defines the interface for reporting what happens during a selection
//! session, so the presentation layer can show it.

use roulette_domain::{Decision, Person, Restaurant};

/// Callback for events during a choose session
///
/// Implementations live in the presentation layer. All methods default to
/// doing nothing.
pub trait SelectionNotifier: Send + Sync {
    /// Called after filters were applied
    fn on_filters_applied(&self, _matched: usize, _total: usize) {}

    /// Called when a candidate is drawn and its ballot opens
    fn on_candidate_picked(&self, _candidate: &Restaurant, _remaining: usize) {}

    /// Called after each individual vote
    fn on_vote_cast(&self, _voter: &Person, _accept: bool) {}

    /// Called when a participant turns the candidate down
    fn on_candidate_rejected(&self, _candidate: &Restaurant, _by: &Person) {}

    /// Called once everyone has accepted
    fn on_decision(&self, _decision: &Decision) {}
}

/// No-op notifier for when nothing needs to be shown
pub struct NoSelectionNotifier;

impl SelectionNotifier for NoSelectionNotifier {}

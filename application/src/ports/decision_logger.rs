//! Port for structured decision history logging.
//!
//! Defines the [`DecisionLogger`] trait for recording session events
//! (candidates drawn, rejections, confirmed decisions) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port keeps a
//! machine-readable history (JSONL).

use serde_json::Value;

/// A structured session event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. The adapter adds the timestamp.
pub struct SessionEvent {
    /// Event type identifier (e.g., "candidate_rejected", "decision_confirmed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SessionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging session events to a structured log.
///
/// The `log` method is synchronous and non-fallible; a history write failure
/// never aborts a decision.
pub trait DecisionLogger: Send + Sync {
    /// Record a session event.
    fn log(&self, event: SessionEvent);
}

/// No-op implementation for tests and when history is disabled.
pub struct NoDecisionLogger;

impl DecisionLogger for NoDecisionLogger {
    fn log(&self, _event: SessionEvent) {}
}

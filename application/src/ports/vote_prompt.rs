//! Vote prompt port for collecting ballot votes.
//!
//! The choose use case asks this port for one vote at a time, for whichever
//! participant the ballot is waiting on.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`VotePort`] - defined here in application layer
//! - **Adapter**: `InteractiveVotePrompt` - implemented in presentation layer
//!
//! # Dismissal
//!
//! A ballot cannot be dismissed. Adapters keep asking until they get an
//! answer; if they cannot (input closed), they return an error and the whole
//! session ends without recording a rejection.
//!
//! # Built-in Implementations
//!
//! - [`AutoAcceptVotes`] - Every participant accepts
//! - [`AutoRejectVotes`] - Every participant rejects

use async_trait::async_trait;
use roulette_domain::Ballot;
use thiserror::Error;

/// Failure to obtain a vote.
///
/// These are not rejections; a rejection is `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VotePortError {
    /// The input source closed before a vote was cast.
    #[error("Vote input closed before a vote was cast")]
    Closed,

    /// Input/output error (e.g., terminal read failure).
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Port for asking the current participant to accept or reject.
#[async_trait]
pub trait VotePort: Send + Sync {
    /// Ask the ballot's current voter for a vote.
    ///
    /// Called only while the ballot is waiting for a vote. Returns
    /// `Ok(true)` to accept and `Ok(false)` to reject.
    async fn request_vote(&self, ballot: &Ballot) -> Result<bool, VotePortError>;
}

/// Every participant accepts the first candidate.
pub struct AutoAcceptVotes;

#[async_trait]
impl VotePort for AutoAcceptVotes {
    async fn request_vote(&self, _ballot: &Ballot) -> Result<bool, VotePortError> {
        Ok(true)
    }
}

/// Every participant rejects, so the session runs until candidates run out.
pub struct AutoRejectVotes;

#[async_trait]
impl VotePort for AutoRejectVotes {
    async fn request_vote(&self, _ballot: &Ballot) -> Result<bool, VotePortError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auto_accept() {
        let ballot = Ballot::new();
        assert_eq!(AutoAcceptVotes.request_vote(&ballot).await, Ok(true));
    }

    #[tokio::test]
    async fn test_auto_reject() {
        let ballot = Ballot::new();
        assert_eq!(AutoRejectVotes.request_vote(&ballot).await, Ok(false));
    }
}

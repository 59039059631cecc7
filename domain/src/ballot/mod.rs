//! Ballot domain
//!
//! A ballot is the sequential accept/reject pass of every participant over
//! one candidate restaurant.
//!
//! # State Machine
//!
//! ```text
//!            start(candidate, participants)
//!   Idle ──────────────────────────────────→ AwaitingVote(0)
//!
//!   AwaitingVote(i) ── accept, i < last ──→ AwaitingVote(i + 1)
//!   AwaitingVote(i) ── accept, i = last ──→ Accepted
//!   AwaitingVote(i) ── reject ────────────→ Rejected
//! ```
//!
//! There is no cancel transition: once open, a ballot only ends through a
//! vote.

mod state;

pub use state::{Ballot, BallotState, VoteOutcome};

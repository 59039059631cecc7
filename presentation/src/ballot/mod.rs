//! Ballot input adapters

mod interactive;

pub use interactive::{InteractiveVotePrompt, parse_vote};

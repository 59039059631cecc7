//! Interactive vote prompt for a ballot.
//!
//! Asks the ballot's current voter to accept or reject the candidate. The
//! prompt is written to stderr so `--output json` keeps stdout clean.
//!
//! ```text
//! ──────────────────────────────────────────
//!   Pizza Place (Italian)
//!   Area: Downtown | Price: $$ | Rating: 4/5 | Delivery: Yes
//! ──────────────────────────────────────────
//! Voter 2 of 3: Bob   (accepted so far: Alice)
//! Bob, accept? [y/n]>
//! ```
//!
//! # Answers
//!
//! | Answer | Aliases |
//! |--------|---------|
//! | accept | `y`, `yes`, `a`, `accept` |
//! | reject | `n`, `no`, `r`, `reject` |
//!
//! There is no way to skip a ballot. Anything else re-prompts; end of input
//! aborts the session.

use async_trait::async_trait;
use colored::Colorize;
use roulette_application::ports::vote_prompt::{VotePort, VotePortError};
use roulette_domain::Ballot;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::Mutex;

/// Interpret one line of input as a vote
pub fn parse_vote(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "a" | "accept" => Some(true),
        "n" | "no" | "r" | "reject" => Some(false),
        _ => None,
    }
}

/// Terminal-based [`VotePort`] reading answers line by line.
pub struct InteractiveVotePrompt {
    input: Mutex<Box<dyn BufRead + Send>>,
}

impl InteractiveVotePrompt {
    /// Prompt on stdin
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    pub fn from_reader(reader: impl BufRead + Send + 'static) -> Self {
        Self {
            input: Mutex::new(Box::new(reader)),
        }
    }

    fn display_ballot(&self, ballot: &Ballot) {
        let Some(candidate) = ballot.candidate() else {
            return;
        };
        let rule = "─".repeat(42);

        eprintln!();
        eprintln!("{}", rule.cyan());
        eprintln!("  {}", candidate.to_string().bold());
        eprintln!("  {}", candidate.details().dimmed());
        eprintln!("{}", rule.cyan());

        if let Some(voter) = ballot.current_voter() {
            let position = ballot.accepted_ids().len() + 1;
            let accepted: Vec<&str> = ballot.accepted_voters().map(|p| p.name.as_str()).collect();
            let so_far = if accepted.is_empty() {
                String::new()
            } else {
                format!("   (accepted so far: {})", accepted.join(", "))
            };
            eprintln!(
                "Voter {} of {}: {}{}",
                position,
                ballot.participants().len(),
                voter.name.bold(),
                so_far.dimmed()
            );
        }
    }

    /// Read one line; `None` at end of input
    fn read_line(&self, voter: &str) -> Result<Option<String>, VotePortError> {
        eprint!("{} ", format!("{}, accept? [y/n]>", voter).magenta().bold());
        io::stderr()
            .flush()
            .map_err(|e| VotePortError::IoError(format!("Failed to flush stderr: {}", e)))?;

        let mut reader = self
            .input
            .lock()
            .map_err(|_| VotePortError::IoError("Vote input lock poisoned".to_string()))?;
        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| VotePortError::IoError(format!("Failed to read input: {}", e)))?;

        Ok((read > 0).then_some(line))
    }
}

impl Default for InteractiveVotePrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VotePort for InteractiveVotePrompt {
    async fn request_vote(&self, ballot: &Ballot) -> Result<bool, VotePortError> {
        self.display_ballot(ballot);
        let voter = ballot
            .current_voter()
            .map(|p| p.name.clone())
            .unwrap_or_default();

        loop {
            let Some(line) = self.read_line(&voter)? else {
                eprintln!();
                return Err(VotePortError::Closed);
            };

            match parse_vote(&line) {
                Some(true) => {
                    eprintln!("{}", format!("✓ {} accepts", voter).green());
                    return Ok(true);
                }
                Some(false) => {
                    eprintln!("{}", format!("✗ {} rejects", voter).red());
                    return Ok(false);
                }
                None if line.trim().is_empty() => continue,
                None => {
                    eprintln!(
                        "{} Unknown answer: {}. Type y to accept or n to reject.",
                        "⚠️".yellow(),
                        line.trim().red()
                    );
                }
            }
        }
    }
}

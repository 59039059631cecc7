//! Console notifier for selection sessions
//!
//! Everything goes to stderr so stdout only carries the final result.

use colored::Colorize;
use roulette_application::ports::selection_notifier::SelectionNotifier;
use roulette_domain::{Decision, Person, Restaurant};

/// Prints each step of a session as it happens
pub struct ConsoleSelectionNotifier {
    quiet: bool,
}

impl ConsoleSelectionNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl SelectionNotifier for ConsoleSelectionNotifier {
    fn on_filters_applied(&self, matched: usize, total: usize) {
        if self.quiet {
            return;
        }
        eprintln!(
            "{}",
            format!("Showing {} of {} restaurants", matched, total).cyan()
        );
    }

    fn on_candidate_picked(&self, candidate: &Restaurant, remaining: usize) {
        if self.quiet {
            return;
        }
        eprintln!(
            "{} {} {}",
            "Drawing...".cyan().bold(),
            candidate.name.bold(),
            format!("(from {} left)", remaining).dimmed()
        );
    }

    fn on_candidate_rejected(&self, candidate: &Restaurant, by: &Person) {
        if self.quiet {
            return;
        }
        eprintln!(
            "{} {} {}",
            candidate.name.yellow(),
            "was rejected by".dimmed(),
            by.name.bold()
        );
    }

    fn on_decision(&self, decision: &Decision) {
        if self.quiet {
            return;
        }
        eprintln!(
            "{} {}",
            "Everyone accepted".green(),
            decision.restaurant.name.green().bold()
        );
    }
}

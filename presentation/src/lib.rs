//! Presentation layer for lunch-roulette
//!
//! This crate contains the CLI definition, console output formatting,
//! the interactive vote prompt and the selection progress notifier.

pub mod ballot;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use ballot::InteractiveVotePrompt;
pub use cli::commands::{
    AutoVote, ChooseArgs, Cli, Command, FilterArgs, OutputFormatArg, PeopleCommand,
    RestaurantArgs, RestaurantsCommand,
};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use progress::ConsoleSelectionNotifier;

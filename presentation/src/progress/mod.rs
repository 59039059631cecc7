//! Progress reporting for a choose session

mod notifier;

pub use notifier::ConsoleSelectionNotifier;

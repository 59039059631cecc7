//! Application-level configuration.
//!
//! - [`SelectionParams`]: knobs for the random selection use cases

pub mod selection_params;

pub use selection_params::SelectionParams;

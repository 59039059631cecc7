//! Presentation-level configuration
//!
//! Resolved output settings, after config files and CLI flags are merged.

use roulette_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Suppress per-step progress messages
    pub quiet: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            quiet: false,
        }
    }
}

impl OutputConfig {
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Apply the color setting process-wide.
    ///
    /// JSON output is never colored.
    pub fn apply_color(&self) {
        if !self.color || self.is_json() {
            colored::control::set_override(false);
        }
    }
}

//! Structured configuration issues.
//!
//! Config validation never fails hard: each problem is reported as a
//! [`ConfigIssue`] and a default is used in its place.

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field did not match any accepted value.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A path-valued field is set but empty.
    EmptyPath { field: String },
}

/// A detected issue in the loaded configuration. Always non-fatal.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

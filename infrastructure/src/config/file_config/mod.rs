//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain and application
//! types on demand.

mod history;
mod log;
mod output;
mod selection;
mod storage;

pub use history::FileHistoryConfig;
pub use log::FileLogConfig;
pub use output::FileOutputConfig;
pub use selection::FileSelectionConfig;
pub use storage::FileStorageConfig;

use roulette_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Record store location
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Diagnostic log destination
    pub log: FileLogConfig,
    /// Decision history (JSONL)
    pub history: FileHistoryConfig,
    /// Random pick settings
    pub selection: FileSelectionConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Every issue is a warning: the affected field falls back to its
    /// default.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.output.parse_format().1);
        issues.extend(self.storage.issues());
        issues.extend(self.log.issues());
        issues.extend(self.history.issues());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roulette_domain::{ConfigIssueCode, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[storage]
data_dir = "/srv/lunch"

[output]
format = "json"
color = false

[log]
file = "/tmp/roulette.log"

[history]
enabled = true

[selection]
seed = 42
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.data_dir.as_deref(), Some("/srv/lunch"));
        assert_eq!(config.output.parse_format().0, OutputFormat::Json);
        assert!(!config.output.color);
        assert!(config.log.resolve_file().is_some());
        assert!(config.history.enabled);
        assert_eq!(config.selection.to_selection_params().seed, Some(42));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[history]
enabled = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.history.enabled);
        // Defaults should apply
        assert!(config.storage.data_dir.is_none());
        assert!(config.output.color);
        assert_eq!(config.output.format, "text");
        assert!(config.selection.seed.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[output]
format = "xml"

[log]
file = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert_eq!(issues.len(), 2);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidEnumValue { .. }
        ));
        assert_eq!(
            issues[1].code,
            ConfigIssueCode::EmptyPath {
                field: "log.file".to_string()
            }
        );
    }
}

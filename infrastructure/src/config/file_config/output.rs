//! Output configuration from TOML (`[output]` section)

use roulette_domain::{ConfigIssue, ConfigIssueCode, OutputFormat};
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// "text" or "json"; unknown values fall back to text with a warning
    pub format: String,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            color: true,
        }
    }
}

impl FileOutputConfig {
    pub fn parse_format(&self) -> (OutputFormat, Vec<ConfigIssue>) {
        match self.format.parse::<OutputFormat>() {
            Ok(format) => (format, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "output.format".to_string(),
                        value: self.format.clone(),
                        valid_values: OutputFormat::VALID_VALUES
                            .iter()
                            .map(|v| v.to_string())
                            .collect(),
                    },
                    format!(
                        "output.format: unknown value '{}', falling back to 'text'",
                        self.format
                    ),
                );
                (OutputFormat::default(), vec![issue])
            }
        }
    }
}

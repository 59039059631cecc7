//! Storage configuration from TOML (`[storage]` section)

use roulette_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory name used under the platform data dir
const APP_DIR: &str = "lunch-roulette";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Where `people.json` and `restaurants.json` live
    pub data_dir: Option<String>,
}

impl FileStorageConfig {
    /// Resolve the data directory.
    ///
    /// Falls back to `$XDG_DATA_HOME/lunch-roulette`, then to
    /// `./.lunch-roulette` when the platform has no data dir.
    pub fn resolve_data_dir(&self) -> PathBuf {
        match self.data_dir.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => expand_home(raw),
            _ => dirs::data_dir()
                .map(|d| d.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from(".lunch-roulette")),
        }
    }

    pub(super) fn issues(&self) -> Vec<ConfigIssue> {
        empty_path_issue("storage.data_dir", self.data_dir.as_deref())
            .into_iter()
            .collect()
    }
}

/// Expand a leading `~/` to the home directory
pub(crate) fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}

/// Warn about a path field that is present but blank
pub(super) fn empty_path_issue(field: &str, value: Option<&str>) -> Option<ConfigIssue> {
    match value {
        Some(v) if v.trim().is_empty() => Some(ConfigIssue::warning(
            ConfigIssueCode::EmptyPath {
                field: field.to_string(),
            },
            format!("{}: empty path, using the default", field),
        )),
        _ => None,
    }
}

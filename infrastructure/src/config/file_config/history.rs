//! Decision history configuration from TOML (`[history]` section)

use super::storage::{empty_path_issue, expand_home};
use roulette_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_FILE: &str = "history.jsonl";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Append every session event to a JSONL file
    pub enabled: bool,
    /// Defaults to `<data_dir>/history.jsonl`
    pub file: Option<String>,
}

impl FileHistoryConfig {
    /// The history file to write, or `None` when history is off
    pub fn resolve_file(&self, data_dir: &Path) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        let path = match self.file.as_deref().map(str::trim) {
            Some(f) if !f.is_empty() => expand_home(f),
            _ => data_dir.join(DEFAULT_FILE),
        };
        Some(path)
    }

    pub(super) fn issues(&self) -> Vec<ConfigIssue> {
        empty_path_issue("history.file", self.file.as_deref())
            .into_iter()
            .collect()
    }
}

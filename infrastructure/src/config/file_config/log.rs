//! Diagnostic log configuration from TOML (`[log]` section)

use super::storage::{empty_path_issue, expand_home};
use roulette_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Write tracing output to this file instead of stderr
    pub file: Option<String>,
}

impl FileLogConfig {
    pub fn resolve_file(&self) -> Option<PathBuf> {
        self.file
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(expand_home)
    }

    pub(super) fn issues(&self) -> Vec<ConfigIssue> {
        empty_path_issue("log.file", self.file.as_deref())
            .into_iter()
            .collect()
    }
}

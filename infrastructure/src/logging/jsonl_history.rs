//! JSONL history writer for session events.
//!
//! Each [`SessionEvent`] becomes one JSON line with a `type` field and a
//! `timestamp`. The file is opened in append mode so history accumulates
//! across runs.

use roulette_application::ports::decision_logger::{DecisionLogger, SessionEvent};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;

/// Appends one JSON object per event.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every line and
/// on `Drop`.
pub struct JsonlDecisionLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlDecisionLogger {
    /// Open (or create) the history file at `path`.
    ///
    /// Parent directories are created as needed. Returns `None` if the file
    /// cannot be opened; history is optional and never blocks a session.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create history directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A panic elsewhere while holding the lock leaves at most a partial
    /// line behind; the writer itself is still usable.
    fn writer(&self) -> MutexGuard<'_, BufWriter<File>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(event: SessionEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        Value::Object(map)
    }
}

impl DecisionLogger for JsonlDecisionLogger {
    fn log(&self, event: SessionEvent) {
        let line = match serde_json::to_string(&Self::record(event)) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not encode history event: {}", e);
                return;
            }
        };

        let mut writer = self.writer();
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!("Could not append to {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlDecisionLogger {
    fn drop(&mut self) {
        let _ = self.writer().flush();
    }
}

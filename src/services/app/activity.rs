//! In-memory activity log rendered by the UI's message pane.
//!
//! Every user action ends in exactly one entry: what ran, whether it worked,
//! and a human-readable message. Entries are structured so the front-end
//! decides how to present them.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

/// Entries kept before the oldest are dropped.
const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySource {
    Unpack,
    FloorPlans,
    FileTypes,
    UpdateCheck,
    TagAudit,
    Settings,
}

impl fmt::Display for ActivitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivitySource::Unpack => "unpack",
            ActivitySource::FloorPlans => "floor plans",
            ActivitySource::FileTypes => "file types",
            ActivitySource::UpdateCheck => "update check",
            ActivitySource::TagAudit => "tag audit",
            ActivitySource::Settings => "settings",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Local>,
    pub level: ActivityLevel,
    pub source: ActivitySource,
    pub message: String,
}

impl ActivityEntry {
    pub fn to_line(&self) -> String {
        let level = match self.level {
            ActivityLevel::Info => "INFO",
            ActivityLevel::Warning => "WARN",
            ActivityLevel::Error => "ERROR",
        };
        format!(
            "[{}] {} {}: {}",
            self.timestamp.format("%H:%M:%S"),
            level,
            self.source,
            self.message
        )
    }
}

pub struct ActivityLog {
    entries: Mutex<VecDeque<ActivityEntry>>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY))),
            capacity: capacity.max(1),
        }
    }

    /// Append an entry (mirrored to the `log` facade) and return it.
    pub fn record(
        &self,
        level: ActivityLevel,
        source: ActivitySource,
        message: impl Into<String>,
    ) -> ActivityEntry {
        let entry = ActivityEntry {
            timestamp: Local::now(),
            level,
            source,
            message: message.into(),
        };

        match level {
            ActivityLevel::Info => log::info!("[{}] {}", source, entry.message),
            ActivityLevel::Warning => log::warn!("[{}] {}", source, entry.message),
            ActivityLevel::Error => log::error!("[{}] {}", source, entry.message),
        }

        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry.clone());
        entry
    }

    /// Snapshot, oldest first.
    pub fn entries(&self) -> Vec<ActivityEntry> {
        let entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clear();
    }
}

#[cfg(test)]
#[path = "tests/activity_tests.rs"]
mod tests;

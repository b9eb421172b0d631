pub mod models;

pub use models::*;

use crate::services::fs_utils::file_utils::atomic_write;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File name of the settings document inside the app config directory.
pub const SETTINGS_FILE: &str = "settings.json";

pub struct ConfigService {
    path: PathBuf,
    settings: Mutex<AppSettings>,
}

impl ConfigService {
    /// Service backed by `path` without reading it; starts from defaults.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            settings: Mutex::new(AppSettings::default()),
        }
    }

    /// Load settings from `path`. A missing or unreadable file falls back to
    /// defaults so the app always starts.
    pub fn load(path: PathBuf) -> Self {
        let settings = Self::read_settings(&path);
        Self {
            path,
            settings: Mutex::new(settings),
        }
    }

    fn read_settings(path: &Path) -> AppSettings {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return AppSettings::default();
            }
            Err(e) => {
                log::error!("Failed to read settings {}: {e}", path.display());
                return AppSettings::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Malformed settings {}, using defaults: {e}", path.display());
                AppSettings::default()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_settings(&self) -> AppSettings {
        self.settings
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Persist `settings` atomically, then make them current.
    pub fn save_settings(&self, settings: AppSettings) -> Result<(), String> {
        let json = serde_json::to_string_pretty(&settings)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;
        atomic_write(&self.path, &json)?;

        let mut current = self
            .settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = settings;
        log::info!("Settings saved to {}", self.path.display());
        Ok(())
    }

    /// Configured workspace, or `default_dir` when none is set.
    pub fn workspace_dir(&self, default_dir: &Path) -> PathBuf {
        self.get_settings()
            .workspace_dir
            .unwrap_or_else(|| default_dir.to_path_buf())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

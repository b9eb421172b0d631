use std::path::PathBuf;
use tauri::{AppHandle, Emitter, Manager};

use crate::services::app::activity::{ActivityLevel, ActivityLog, ActivitySource};
use crate::services::config::ConfigService;
use crate::services::fs_utils::path_utils;
use crate::services::project::{ArchiveSummary, UnpackResult, FLOOR_PLANS_FILE};
use crate::services::update::UpdateCheck;
use crate::types::errors::{CommandError, CommandResult};

/// Event carrying each new `ActivityEntry` to the webview.
pub const ACTIVITY_EVENT: &str = "activity";

/// Folder under the app data dir used when no workspace is configured.
const DEFAULT_WORKSPACE_DIR: &str = "projects";

/// Record an activity entry and push it to the UI.
pub(crate) fn report(
    app: &AppHandle,
    activity: &ActivityLog,
    level: ActivityLevel,
    source: ActivitySource,
    message: impl Into<String>,
) {
    let entry = activity.record(level, source, message);
    if let Err(e) = app.emit(ACTIVITY_EVENT, &entry) {
        log::warn!("Failed to emit activity event: {e}");
    }
}

pub(crate) fn workspace_dir(app: &AppHandle, config: &ConfigService) -> CommandResult<PathBuf> {
    let app_data_dir = app
        .path()
        .app_data_dir()
        .map_err(|e| CommandError::Internal(format!("Failed to get app data dir: {e}")))?;
    Ok(config.workspace_dir(&app_data_dir.join(DEFAULT_WORKSPACE_DIR)))
}

/// Folder of an unpacked project; rejects names that are not a single path component.
pub(crate) fn project_dir(
    app: &AppHandle,
    config: &ConfigService,
    project_name: &str,
) -> CommandResult<PathBuf> {
    let workspace = workspace_dir(app, config)?;
    let dir = path_utils::project_dir(&workspace, project_name)
        .ok_or_else(|| CommandError::NotFound(format!("Invalid project name: '{project_name}'")))?;
    if !dir.is_dir() {
        return Err(CommandError::NotFound(format!(
            "Project '{project_name}' is not unpacked"
        )));
    }
    Ok(dir)
}

pub(crate) fn describe_unpack(result: &UnpackResult) -> String {
    format!(
        "Unpacked {} files into {}",
        result.files_extracted,
        result.dest_path.display()
    )
}

pub(crate) fn describe_inspect(
    archive_path: &str,
    summary: &ArchiveSummary,
) -> (ActivityLevel, String) {
    let mut message = format!(
        "{archive_path}: {} entries, {} bytes uncompressed",
        summary.entry_count, summary.uncompressed_size
    );
    if summary.has_floor_plans {
        (ActivityLevel::Info, message)
    } else {
        message.push_str(&format!(", no {FLOOR_PLANS_FILE}"));
        (ActivityLevel::Warning, message)
    }
}

pub(crate) fn describe_update(check: &UpdateCheck) -> (ActivityLevel, String) {
    match check.commit() {
        Some(commit) => (
            ActivityLevel::Info,
            format!(
                "Latest commit {}: {}",
                commit.short_sha(),
                commit.summary()
            ),
        ),
        None => (
            ActivityLevel::Warning,
            format!(
                "Update check unavailable: {}",
                check.error.as_deref().unwrap_or("failed to fetch")
            ),
        ),
    }
}

use crate::services::app::activity::{ActivityEntry, ActivityLog};
use crate::services::app::log_service;
use crate::types::errors::{CommandError, CommandResult};
use tauri::{AppHandle, Manager, State};

/// Everything currently in the activity log, oldest first.
#[tauri::command]
pub async fn get_activity(activity: State<'_, ActivityLog>) -> CommandResult<Vec<ActivityEntry>> {
    Ok(activity.entries())
}

#[tauri::command]
pub async fn clear_activity(activity: State<'_, ActivityLog>) -> CommandResult<()> {
    activity.clear();
    Ok(())
}

/// Last `lines` lines of the application log file, for the "Log file" tab.
#[tauri::command]
pub async fn get_log_lines(app: AppHandle, lines: usize) -> CommandResult<Vec<String>> {
    let log_dir = app
        .path()
        .app_log_dir()
        .map_err(|e| CommandError::Internal(format!("Failed to get log dir: {e}")))?;
    let log_path = log_service::log_file_path(&log_dir);
    let tail =
        tauri::async_runtime::spawn_blocking(move || log_service::read_log_tail(&log_path, lines))
            .await??;
    Ok(tail)
}

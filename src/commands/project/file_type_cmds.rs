use crate::commands::helpers::report;
use crate::services::app::activity::{ActivityLevel, ActivityLog, ActivitySource};
use crate::services::file_types::{self, FileTypeEntry};
use crate::types::errors::CommandResult;
use std::path::PathBuf;
use tauri::{AppHandle, State};

/// Report the content-sniffed type of each file directly inside `directory`.
///
/// Each file gets its own `name: type` activity line; unreadable files are
/// reported as warnings without stopping the scan.
#[tauri::command]
pub async fn report_file_types_cmd(
    app: AppHandle,
    activity: State<'_, ActivityLog>,
    directory: String,
) -> CommandResult<Vec<FileTypeEntry>> {
    let dir = PathBuf::from(&directory);
    let scan = tauri::async_runtime::spawn_blocking(move || {
        file_types::report_file_types(&dir).map(|entries| entries.collect::<Vec<_>>())
    })
    .await?;

    let entries = match scan {
        Ok(entries) => entries,
        Err(e) => {
            report(
                &app,
                &activity,
                ActivityLevel::Error,
                ActivitySource::FileTypes,
                format!("Cannot read directory '{directory}': {e}"),
            );
            return Err(e.into());
        }
    };

    for entry in &entries {
        let level = if entry.error.is_some() {
            ActivityLevel::Warning
        } else {
            ActivityLevel::Info
        };
        report(&app, &activity, level, ActivitySource::FileTypes, entry.to_line());
    }
    Ok(entries)
}

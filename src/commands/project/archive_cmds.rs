//! Commands for unpacking project archives and browsing the workspace.

use crate::commands::helpers::{self, describe_inspect, describe_unpack, report};
use crate::services::app::activity::{ActivityLevel, ActivityLog, ActivitySource};
use crate::services::config::ConfigService;
use crate::services::project::{self, ArchiveSummary, Project, UnpackResult};
use crate::types::errors::{CommandError, CommandResult};
use std::path::PathBuf;
use tauri::{AppHandle, State};
use tauri_plugin_opener::OpenerExt;

/// Unpack an `.esx` archive into the workspace.
///
/// `project_name` defaults to the archive's file name without extension.
/// Failures are reported to the activity log and returned; nothing is retried.
#[tauri::command]
pub async fn unpack_project_cmd(
    app: AppHandle,
    config: State<'_, ConfigService>,
    activity: State<'_, ActivityLog>,
    archive_path: String,
    project_name: Option<String>,
) -> CommandResult<UnpackResult> {
    let archive = PathBuf::from(&archive_path);
    let name = project_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| project::default_project_name(&archive));
    let workspace = helpers::workspace_dir(&app, &config)?;

    let task_name = name.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        project::unpack_project(&workspace, &task_name, &archive)
    })
    .await?;

    match result {
        Ok(unpacked) => {
            report(
                &app,
                &activity,
                ActivityLevel::Info,
                ActivitySource::Unpack,
                describe_unpack(&unpacked),
            );
            Ok(unpacked)
        }
        Err(e) => {
            report(
                &app,
                &activity,
                ActivityLevel::Error,
                ActivitySource::Unpack,
                format!("Failed to unpack '{archive_path}' as '{name}': {e}"),
            );
            Err(e.into())
        }
    }
}

/// Summarize an archive without extracting it.
///
/// The UI calls this before unpacking; an archive without `floorPlans.json`
/// is logged as a warning so the user can decide whether to continue.
#[tauri::command]
pub async fn inspect_archive_cmd(
    app: AppHandle,
    activity: State<'_, ActivityLog>,
    archive_path: String,
) -> CommandResult<ArchiveSummary> {
    let archive = PathBuf::from(&archive_path);
    let result =
        tauri::async_runtime::spawn_blocking(move || project::inspect_archive(&archive)).await?;

    match result {
        Ok(summary) => {
            let (level, message) = describe_inspect(&archive_path, &summary);
            report(&app, &activity, level, ActivitySource::Unpack, message);
            Ok(summary)
        }
        Err(e) => {
            report(
                &app,
                &activity,
                ActivityLevel::Error,
                ActivitySource::Unpack,
                format!("Failed to inspect '{archive_path}': {e}"),
            );
            Err(e.into())
        }
    }
}

/// Projects already unpacked in the workspace.
#[tauri::command]
pub async fn list_projects_cmd(
    app: AppHandle,
    config: State<'_, ConfigService>,
) -> CommandResult<Vec<Project>> {
    let workspace = helpers::workspace_dir(&app, &config)?;
    let projects =
        tauri::async_runtime::spawn_blocking(move || project::list_projects(&workspace)).await??;
    Ok(projects)
}

/// Reveal a project's folder in the OS file manager.
#[tauri::command]
pub async fn open_project_folder(
    app: AppHandle,
    config: State<'_, ConfigService>,
    project_name: String,
) -> CommandResult<()> {
    let dir = helpers::project_dir(&app, &config, &project_name)?;
    app.opener()
        .open_path(dir.to_string_lossy(), None::<&str>)
        .map_err(|e| CommandError::Internal(format!("Failed to open project folder: {e}")))
}

use crate::commands::helpers::{describe_update, report};
use crate::services::app::activity::{ActivityLog, ActivitySource};
use crate::services::config::ConfigService;
use crate::services::update::{self, UpdateCheck};
use crate::types::errors::CommandResult;
use tauri::{AppHandle, State};

/// Fetch the latest commit of the configured repository.
///
/// Never errors: an unavailable check comes back with empty `sha`/`message`.
#[tauri::command]
pub async fn check_for_update_cmd(
    app: AppHandle,
    config: State<'_, ConfigService>,
    activity: State<'_, ActivityLog>,
) -> CommandResult<UpdateCheck> {
    let source = config.get_settings().update;
    let check = update::check_for_update(&source).await;

    let (level, message) = describe_update(&check);
    report(&app, &activity, level, ActivitySource::UpdateCheck, message);
    Ok(check)
}

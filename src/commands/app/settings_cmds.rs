use crate::commands::helpers::report;
use crate::services::app::activity::{ActivityLevel, ActivityLog, ActivitySource};
use crate::services::config::{AppSettings, ConfigService};
use crate::types::errors::{CommandError, CommandResult};
use tauri::{AppHandle, State};

#[tauri::command]
pub async fn get_settings(config: State<'_, ConfigService>) -> CommandResult<AppSettings> {
    Ok(config.get_settings())
}

#[tauri::command]
pub async fn save_settings(
    app: AppHandle,
    config: State<'_, ConfigService>,
    activity: State<'_, ActivityLog>,
    settings: AppSettings,
) -> CommandResult<()> {
    match config.save_settings(settings) {
        Ok(()) => {
            report(
                &app,
                &activity,
                ActivityLevel::Info,
                ActivitySource::Settings,
                "Settings saved",
            );
            Ok(())
        }
        Err(e) => {
            report(
                &app,
                &activity,
                ActivityLevel::Error,
                ActivitySource::Settings,
                format!("Failed to save settings: {e}"),
            );
            Err(CommandError::Io(e))
        }
    }
}

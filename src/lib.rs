use tauri::Manager;
use tauri_plugin_log::{Target, TargetKind};

pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

use services::app::activity::ActivityLog;
use services::app::log_service::LOG_FILE_NAME;
use services::config::{ConfigService, SETTINGS_FILE};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            // Focus the existing window when a second instance is attempted
            if let Some(window) = app.get_webview_window("main") {
                let _ = window.set_focus();
                let _ = window.unminimize();
            }
        }))
        .plugin(tauri_plugin_opener::init())
        .plugin(
            tauri_plugin_log::Builder::default()
                .targets([
                    Target::new(TargetKind::Stdout),
                    Target::new(TargetKind::LogDir {
                        file_name: Some(LOG_FILE_NAME.into()),
                    }),
                    Target::new(TargetKind::Webview),
                ])
                .build(),
        )
        .setup(|app| {
            let config_dir = app.path().app_config_dir()?;
            let config = ConfigService::load(config_dir.join(SETTINGS_FILE));
            log::info!("Settings loaded from {}", config.path().display());
            app.manage(config);
            Ok(())
        })
        .manage(ActivityLog::new())
        .invoke_handler(tauri::generate_handler![
            commands::app::app_cmds::get_activity,
            commands::app::app_cmds::clear_activity,
            commands::app::app_cmds::get_log_lines,
            commands::app::settings_cmds::get_settings,
            commands::app::settings_cmds::save_settings,
            commands::app::update_cmds::check_for_update_cmd,
            commands::project::archive_cmds::unpack_project_cmd,
            commands::project::archive_cmds::inspect_archive_cmd,
            commands::project::archive_cmds::list_projects_cmd,
            commands::project::archive_cmds::open_project_folder,
            commands::project::metadata_cmds::get_floor_plans_cmd,
            commands::project::metadata_cmds::audit_tags_cmd,
            commands::project::file_type_cmds::report_file_types_cmd,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

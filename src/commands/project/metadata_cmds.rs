//! Commands that read an unpacked project's JSON metadata.

use crate::commands::helpers::{self, report};
use crate::services::app::activity::{ActivityLevel, ActivityLog, ActivitySource};
use crate::services::config::ConfigService;
use crate::services::floor_plans::{self, FloorPlanRecord};
use crate::services::tags::{self, TagOffender};
use crate::types::errors::CommandResult;
use tauri::{AppHandle, State};

/// Floor plans of an unpacked project, ordered by id.
///
/// A missing or malformed `floorPlans.json` is reported to the activity log
/// and yields an empty list.
#[tauri::command]
pub async fn get_floor_plans_cmd(
    app: AppHandle,
    config: State<'_, ConfigService>,
    activity: State<'_, ActivityLog>,
    project_name: String,
) -> CommandResult<Vec<FloorPlanRecord>> {
    let dir = helpers::project_dir(&app, &config, &project_name)?;
    let result = tauri::async_runtime::spawn_blocking(move || floor_plans::build_catalog(&dir))
        .await?;

    match result {
        Ok(catalog) => {
            let records: Vec<FloorPlanRecord> = catalog.into_values().collect();
            let mut message = format!("{} floor plans in '{project_name}'", records.len());
            for record in &records {
                message.push_str(&format!("\n{}: {}", record.id, record.name));
            }
            report(&app, &activity, ActivityLevel::Info, ActivitySource::FloorPlans, message);
            Ok(records)
        }
        Err(e) => {
            report(
                &app,
                &activity,
                ActivityLevel::Error,
                ActivitySource::FloorPlans,
                format!("Could not read floor plans of '{project_name}': {e}"),
            );
            Ok(Vec::new())
        }
    }
}

/// Access points missing any of the configured required tag keys.
#[tauri::command]
pub async fn audit_tags_cmd(
    app: AppHandle,
    config: State<'_, ConfigService>,
    activity: State<'_, ActivityLog>,
    project_name: String,
) -> CommandResult<Vec<TagOffender>> {
    let required_keys = config.get_settings().required_tag_keys;
    if required_keys.is_empty() {
        report(
            &app,
            &activity,
            ActivityLevel::Warning,
            ActivitySource::TagAudit,
            "No required tag keys configured",
        );
        return Ok(Vec::new());
    }

    let dir = helpers::project_dir(&app, &config, &project_name)?;
    let result =
        tauri::async_runtime::spawn_blocking(move || tags::audit_tags(&dir, &required_keys))
            .await?;

    match result {
        Ok(offenders) if offenders.is_empty() => {
            report(
                &app,
                &activity,
                ActivityLevel::Info,
                ActivitySource::TagAudit,
                format!("All access points in '{project_name}' carry the required tags"),
            );
            Ok(offenders)
        }
        Ok(offenders) => {
            let mut message = format!(
                "{} access points in '{project_name}' are missing tags",
                offenders.len()
            );
            for offender in &offenders {
                message.push_str(&format!(
                    "\n{} ({}): {}",
                    offender.access_point,
                    offender.floor_plan.as_deref().unwrap_or("no floor plan"),
                    offender.missing_keys.join(", ")
                ));
            }
            report(&app, &activity, ActivityLevel::Warning, ActivitySource::TagAudit, message);
            Ok(offenders)
        }
        Err(e) => {
            report(
                &app,
                &activity,
                ActivityLevel::Error,
                ActivitySource::TagAudit,
                format!("Tag audit of '{project_name}' failed: {e}"),
            );
            Err(e.into())
        }
    }
}

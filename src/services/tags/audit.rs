//! Finds access points that are missing any of the configured required tags.
//!
//! Tag values live on each access point as `{tagKeyId, value}` pairs; the
//! human-readable key names come from `tagKeys.json`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::services::floor_plans::{self, read_project_json, CatalogError};

pub const TAG_KEYS_FILE: &str = "tagKeys.json";
pub const ACCESS_POINTS_FILE: &str = "accessPoints.json";

/// An access point lacking one or more required tags.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TagOffender {
    pub access_point: String,
    pub floor_plan: Option<String>,
    pub missing_keys: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TagKeysDocument {
    #[serde(rename = "tagKeys", default)]
    tag_keys: Vec<TagKey>,
}

#[derive(Debug, Deserialize)]
struct TagKey {
    id: String,
    key: String,
}

#[derive(Debug, Deserialize)]
struct AccessPointsDocument {
    #[serde(rename = "accessPoints", default)]
    access_points: Vec<AccessPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccessPoint {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    location: Option<Location>,
    #[serde(default)]
    tags: Vec<TagValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    floor_plan_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TagValue {
    tag_key_id: String,
    #[serde(default)]
    value: Option<String>,
}

/// Audit every access point of an unpacked project against `required_keys`.
///
/// A tag counts as present only when it has a non-blank value.
pub fn audit_tags(
    project_dir: &Path,
    required_keys: &[String],
) -> Result<Vec<TagOffender>, CatalogError> {
    if required_keys.is_empty() {
        return Ok(Vec::new());
    }

    let access_points =
        match read_project_json::<AccessPointsDocument>(project_dir, ACCESS_POINTS_FILE) {
            Ok(doc) => doc.access_points,
            Err(CatalogError::Missing(_)) => {
                log::info!("No access points in {}", project_dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

    // tagKeyId -> key name
    let key_names: HashMap<String, String> =
        match read_project_json::<TagKeysDocument>(project_dir, TAG_KEYS_FILE) {
            Ok(doc) => doc.tag_keys.into_iter().map(|k| (k.id, k.key)).collect(),
            Err(CatalogError::Missing(_)) => HashMap::new(),
            Err(e) => return Err(e),
        };

    let floor_plan_names: HashMap<String, String> = match floor_plans::build_catalog(project_dir) {
        Ok(catalog) => catalog
            .into_values()
            .map(|record| (record.id, record.name))
            .collect(),
        Err(e) => {
            log::warn!("Tag audit without floor plan names: {e}");
            HashMap::new()
        }
    };

    let mut offenders = Vec::new();
    for ap in access_points {
        let present: Vec<&str> = ap
            .tags
            .iter()
            .filter(|t| t.value.as_deref().is_some_and(|v| !v.trim().is_empty()))
            .filter_map(|t| key_names.get(&t.tag_key_id).map(String::as_str))
            .collect();

        let missing_keys: Vec<String> = required_keys
            .iter()
            .filter(|key| !present.contains(&key.as_str()))
            .cloned()
            .collect();

        if missing_keys.is_empty() {
            continue;
        }

        let floor_plan = ap
            .location
            .and_then(|loc| loc.floor_plan_id)
            .map(|id| floor_plan_names.get(&id).cloned().unwrap_or(id));

        offenders.push(TagOffender {
            access_point: ap.name.unwrap_or(ap.id),
            floor_plan,
            missing_keys,
        });
    }

    Ok(offenders)
}

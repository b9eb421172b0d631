use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::services::project::FLOOR_PLANS_FILE;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Metadata file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed {file}: {reason}")]
    Malformed { file: String, reason: String },
    #[error("Duplicate floor plan id '{0}'")]
    DuplicateId(String),
}

impl CatalogError {
    pub(crate) fn malformed(file: &str, reason: impl ToString) -> Self {
        CatalogError::Malformed {
            file: file.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// A single floor plan as shown to the user.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FloorPlanRecord {
    pub id: String,
    pub name: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub image_id: Option<String>,
}

impl FloorPlanRecord {
    /// Validates that both id and name are non-blank.
    pub(crate) fn new(id: &str, entry: FloorPlanEntry) -> Result<Self, CatalogError> {
        if id.trim().is_empty() {
            return Err(CatalogError::malformed(
                FLOOR_PLANS_FILE,
                "floor plan with empty id",
            ));
        }
        let name = match entry.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(CatalogError::malformed(
                    FLOOR_PLANS_FILE,
                    format!("floor plan '{id}' has no name"),
                ))
            }
        };
        Ok(Self {
            id: id.to_string(),
            name,
            width: entry.width,
            height: entry.height,
            image_id: entry.image_id,
        })
    }
}

pub type FloorPlanCatalog = BTreeMap<String, FloorPlanRecord>;

/// Raw entry as it appears in `floorPlans.json`. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FloorPlanEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    image_id: Option<String>,
}

/// Key wrapping the list in Ekahau exports.
const WRAPPED_KEY: &str = "floorPlans";

/// Accepted document shapes. The Ekahau export `{"floorPlans": [ ... ]}`
/// is unwrapped into `List`.
#[derive(Debug)]
enum FloorPlansDocument {
    List(Vec<FloorPlanEntry>),
    Keyed(BTreeMap<String, FloorPlanEntry>),
}

impl FloorPlansDocument {
    /// Picks the shape from the top-level JSON value, then deserializes it so
    /// that field errors (e.g. a non-numeric `width`) keep their serde reason.
    fn from_value(value: Value) -> Result<Self, CatalogError> {
        let malformed = |e: serde_json::Error| CatalogError::malformed(FLOOR_PLANS_FILE, e);
        match value {
            Value::Object(mut map) if map.contains_key(WRAPPED_KEY) => {
                let list = map.remove(WRAPPED_KEY).unwrap_or_default();
                serde_json::from_value(list).map(Self::List).map_err(malformed)
            }
            Value::Object(_) => serde_json::from_value(value)
                .map(Self::Keyed)
                .map_err(malformed),
            Value::Array(_) => serde_json::from_value(value)
                .map(Self::List)
                .map_err(malformed),
            _ => Err(CatalogError::malformed(
                FLOOR_PLANS_FILE,
                "expected an object or an array at the top level",
            )),
        }
    }
}

/// Build the floor plan catalog of an unpacked project.
///
/// Returns `CatalogError::Missing` when the project has no `floorPlans.json`.
pub fn build_catalog(project_dir: &Path) -> Result<FloorPlanCatalog, CatalogError> {
    let value: Value = read_project_json(project_dir, FLOOR_PLANS_FILE)?;

    let mut catalog = FloorPlanCatalog::new();
    match FloorPlansDocument::from_value(value)? {
        FloorPlansDocument::List(floor_plans) => {
            for entry in floor_plans {
                let id = entry.id.clone().unwrap_or_default();
                let record = FloorPlanRecord::new(&id, entry)?;
                if catalog.insert(id.clone(), record).is_some() {
                    return Err(CatalogError::DuplicateId(id));
                }
            }
        }
        FloorPlansDocument::Keyed(entries) => {
            for (id, entry) in entries {
                let record = FloorPlanRecord::new(&id, entry)?;
                catalog.insert(id, record);
            }
        }
    }

    log::debug!(
        "Loaded {} floor plans from {}",
        catalog.len(),
        project_dir.display()
    );
    Ok(catalog)
}

/// Read and deserialize one of the project's JSON metadata files.
pub(crate) fn read_project_json<T: serde::de::DeserializeOwned>(
    project_dir: &Path,
    file_name: &str,
) -> Result<T, CatalogError> {
    let path = project_dir.join(file_name);
    if !path.is_file() {
        return Err(CatalogError::Missing(path));
    }

    let content = fs::read_to_string(&path).map_err(|source| CatalogError::Read {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|e| CatalogError::malformed(file_name, e))
}

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Metadata file every Ekahau project carries at its archive root.
pub const FLOOR_PLANS_FILE: &str = "floorPlans.json";

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Archive not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid project name: '{0}'")]
    InvalidProjectName(String),
    #[error("Invalid or corrupt archive: {0}")]
    Corrupt(#[from] zip::result::ZipError),
    #[error(
        "Insufficient disk space. Requires {required} bytes, but only {available} bytes available."
    )]
    InsufficientSpace { required: u64, available: u64 },
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ArchiveError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ArchiveError::Io {
            action,
            path,
            source,
        }
    }
}

/// Outcome of a successful unpack.
#[derive(Debug, Clone, Serialize)]
pub struct UnpackResult {
    pub project_name: String,
    pub dest_path: PathBuf,
    pub files_extracted: usize,
}

/// Pre-extraction view of an archive.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveSummary {
    pub entry_count: usize,
    pub uncompressed_size: u64,
    pub has_floor_plans: bool,
}

/// An unpacked project inside the workspace.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
    pub file_count: usize,
}

use super::types::{ArchiveError, Project};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// List unpacked projects (direct subfolders) in the workspace, sorted by name.
///
/// A workspace that does not exist yet simply has no projects.
pub fn list_projects(workspace_dir: &Path) -> Result<Vec<Project>, ArchiveError> {
    if !workspace_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(workspace_dir).map_err(ArchiveError::io("read", workspace_dir))?;

    let mut projects: Vec<Project> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let file_count = WalkDir::new(&path)
                .follow_links(false)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .count();
            Project {
                name,
                path,
                file_count,
            }
        })
        .collect();

    projects.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(projects)
}

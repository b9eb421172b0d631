use std::path::{Component, Path, PathBuf};

/// Resolve a project name coming from the UI to its folder in the workspace.
///
/// Returns `None` unless the name is exactly one normal path component, so
/// callers can never be pointed outside the workspace.
pub fn project_dir(workspace_dir: &Path, project_name: &str) -> Option<PathBuf> {
    let mut components = Path::new(project_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => Some(workspace_dir.join(name)),
        _ => None,
    }
}

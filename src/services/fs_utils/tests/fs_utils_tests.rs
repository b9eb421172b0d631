use super::file_utils::atomic_write;
use super::path_utils::project_dir;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn atomic_write_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sub").join("settings.json");
    atomic_write(&path, "{}").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn atomic_write_overwrites_without_tmp_leftover() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    atomic_write(&path, "first").unwrap();
    atomic_write(&path, "second").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn project_dir_accepts_single_component() {
    let ws = Path::new("/surveys");
    assert_eq!(
        project_dir(ws, "Warehouse B"),
        Some(Path::new("/surveys/Warehouse B").to_path_buf())
    );
}

#[test]
fn project_dir_rejects_traversal() {
    let ws = Path::new("/surveys");
    for name in ["", ".", "..", "../etc", "a/b", "/abs"] {
        assert_eq!(project_dir(ws, name), None, "{name:?}");
    }
}

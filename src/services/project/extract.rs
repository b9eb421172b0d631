use super::analyze::inspect_archive;
use super::types::{ArchiveError, UnpackResult};
use std::fs;
use std::io;
use std::path::Path;

/// Headroom required on top of the archive's uncompressed size.
const SPACE_BUFFER_BYTES: u64 = 50 * 1024 * 1024;

/// Used when the archive's file stem sanitizes down to nothing usable.
const FALLBACK_PROJECT_NAME: &str = "project";

/// Project name derived from the archive file name, sans extension.
///
/// The stem is sanitized so that any archive name yields a name that
/// `unpack_project` accepts (e.g. `HQ: Level 2?.esx` becomes `HQ Level 2`).
pub fn default_project_name(archive_path: &Path) -> String {
    archive_path
        .file_stem()
        .map(|stem| {
            sanitize_filename::sanitize(stem.to_string_lossy())
                .trim()
                .to_string()
        })
        .filter(|name| validate_project_name(name).is_ok())
        .unwrap_or_else(|| FALLBACK_PROJECT_NAME.to_string())
}

/// Extract a project archive into `workspace_dir/project_name`.
///
/// Steps:
/// 1. Validate the project name (single, sanitized path component)
/// 2. Inspect the archive and check free disk space
/// 3. Create the destination folder if absent
/// 4. Extract every entry, skipping names that would escape the destination
///
/// Existing files in the destination are overwritten.
pub fn unpack_project(
    workspace_dir: &Path,
    project_name: &str,
    archive_path: &Path,
) -> Result<UnpackResult, ArchiveError> {
    validate_project_name(project_name)?;

    if !archive_path.is_file() {
        return Err(ArchiveError::NotFound(archive_path.to_path_buf()));
    }

    let summary = inspect_archive(archive_path)?;
    ensure_free_space(workspace_dir, summary.uncompressed_size + SPACE_BUFFER_BYTES)?;

    let dest_path = workspace_dir.join(project_name);
    if dest_path.exists() {
        log::info!("Unpacking over existing project: {}", dest_path.display());
    }
    fs::create_dir_all(&dest_path).map_err(ArchiveError::io("create", &dest_path))?;

    let files_extracted = extract_zip_inner(archive_path, &dest_path)?;

    log::info!(
        "Unpacked {} files from {} into {}",
        files_extracted,
        archive_path.display(),
        dest_path.display()
    );

    Ok(UnpackResult {
        project_name: project_name.to_string(),
        dest_path,
        files_extracted,
    })
}

fn validate_project_name(name: &str) -> Result<(), ArchiveError> {
    let trimmed = name.trim();
    let sanitized = sanitize_filename::sanitize(trimmed);
    if trimmed.is_empty() || trimmed != name || sanitized != name || name == "." || name == ".." {
        return Err(ArchiveError::InvalidProjectName(name.to_string()));
    }
    Ok(())
}

fn ensure_free_space(workspace_dir: &Path, required: u64) -> Result<(), ArchiveError> {
    let disks = sysinfo::Disks::new_with_refreshed_list();
    let search_path = workspace_dir
        .canonicalize()
        .unwrap_or_else(|_| workspace_dir.to_path_buf());

    let mut available = 0;
    let mut matched_len = 0;
    for disk in disks.list() {
        let mount = disk.mount_point();
        if search_path.starts_with(mount) {
            let mount_len = mount.as_os_str().len();
            if mount_len > matched_len {
                matched_len = mount_len;
                available = disk.available_space();
            }
        }
    }

    // No matching mount (e.g. sandboxed or unusual filesystems): let extraction decide.
    if matched_len > 0 && available < required {
        return Err(ArchiveError::InsufficientSpace {
            required,
            available,
        });
    }
    Ok(())
}

fn extract_zip_inner(archive_path: &Path, dest_path: &Path) -> Result<usize, ArchiveError> {
    let file = fs::File::open(archive_path).map_err(ArchiveError::io("open", archive_path))?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut count: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        let entry_path = match entry.enclosed_name() {
            Some(p) => p,
            None => {
                log::warn!("Skipping unsafe archive entry: {}", entry.name());
                continue;
            }
        };

        let output_path = dest_path.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path).map_err(ArchiveError::io("create", &output_path))?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(ArchiveError::io("create", parent))?;
            }
            let mut outfile =
                fs::File::create(&output_path).map_err(ArchiveError::io("create", &output_path))?;
            io::copy(&mut entry, &mut outfile).map_err(ArchiveError::io("write", &output_path))?;
            count += 1;
        }
    }
    Ok(count)
}

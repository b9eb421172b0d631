use super::types::{ArchiveError, ArchiveSummary, FLOOR_PLANS_FILE};
use std::fs;
use std::path::Path;

/// Inspect a project archive without extracting it.
pub fn inspect_archive(archive_path: &Path) -> Result<ArchiveSummary, ArchiveError> {
    let file = fs::File::open(archive_path).map_err(ArchiveError::io("open", archive_path))?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut has_floor_plans = false;
    let mut uncompressed_size: u64 = 0;

    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        uncompressed_size += entry.size();

        if entry.name().trim_start_matches('/') == FLOOR_PLANS_FILE {
            has_floor_plans = true;
        }
    }

    Ok(ArchiveSummary {
        entry_count: archive.len(),
        uncompressed_size,
        has_floor_plans,
    })
}

//! Ekahau project archives: inspection, extraction into the workspace,
//! and listing of already unpacked projects.

mod analyze;
mod extract;
mod listing;
mod types;

// Re-export public API
pub use analyze::inspect_archive;
pub use extract::{default_project_name, unpack_project};
pub use listing::list_projects;
pub use types::{ArchiveError, ArchiveSummary, Project, UnpackResult, FLOOR_PLANS_FILE};

#[cfg(test)]
#[path = "tests/project_tests.rs"]
mod tests;

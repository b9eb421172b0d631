pub mod commit_check;

pub use commit_check::{check_for_update, fetch_latest_commit, CommitInfo, UpdateCheck};

#[cfg(test)]
#[path = "tests/commit_check_tests.rs"]
mod tests;

//! Required-tag audit over a project's access points.

mod audit;

pub use audit::{audit_tags, TagOffender, ACCESS_POINTS_FILE, TAG_KEYS_FILE};

#[cfg(test)]
#[path = "tests/audit_tests.rs"]
mod tests;

//! Content-sniffed file type reporting for a directory.

mod detect;

pub use detect::{detect_mime, report_file_types, FileTypeEntry};

#[cfg(test)]
#[path = "tests/detect_tests.rs"]
mod tests;

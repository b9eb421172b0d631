pub mod file_utils;
pub mod path_utils;

#[cfg(test)]
#[path = "tests/fs_utils_tests.rs"]
mod fs_utils_tests;

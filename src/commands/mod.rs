pub mod app;
pub(crate) mod helpers;
pub mod project;

#[cfg(test)]
#[path = "tests/helpers_tests.rs"]
mod helpers_tests;

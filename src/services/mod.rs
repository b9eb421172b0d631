pub mod app;
pub mod config;
pub mod file_types;
pub mod floor_plans;
pub mod fs_utils;
pub mod project;
pub mod tags;
pub mod update;

pub mod activity;
pub mod log_service;

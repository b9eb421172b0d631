pub mod app_cmds;
pub mod settings_cmds;
pub mod update_cmds;

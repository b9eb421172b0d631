pub mod archive_cmds;
pub mod file_type_cmds;
pub mod metadata_cmds;

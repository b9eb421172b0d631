use serde::Serialize;
use thiserror::Error;

use crate::services::floor_plans::CatalogError;
use crate::services::project::ArchiveError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Archive error: {0}")]
    Archive(String),
    #[error("Metadata error: {0}")]
    Metadata(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ArchiveError> for CommandError {
    fn from(error: ArchiveError) -> Self {
        CommandError::Archive(error.to_string())
    }
}

impl From<CatalogError> for CommandError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Missing(path) => CommandError::NotFound(path.display().to_string()),
            other => CommandError::Metadata(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(error: std::io::Error) -> Self {
        CommandError::Io(error.to_string())
    }
}

impl From<tauri::Error> for CommandError {
    fn from(error: tauri::Error) -> Self {
        CommandError::Internal(error.to_string())
    }
}

impl Serialize for CommandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;

//! History storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where assessment history is kept
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Directory for JSON-lines history files; in-memory when unset
    pub history_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.history_dir {
            Some(dir) if dir.as_os_str().is_empty() => Err(ValidationError::EmptyHistoryDir),
            _ => Ok(()),
        }
    }
}

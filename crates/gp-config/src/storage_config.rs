use crate::{ConfigError, ConfigErrorResult, DEFAULT_SLOT_KEY, DEFAULT_STORAGE_DIR};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the durable slot, relative to the config directory
    pub dir: String,
    /// Name of the slot; the file is `<dir>/<slot_key>.json`
    pub slot_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
            slot_key: String::from(DEFAULT_SLOT_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        if self.slot_key.is_empty() {
            return Err(ConfigError::storage("storage.slot_key cannot be empty"));
        }

        if !self
            .slot_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::storage(format!(
                "storage.slot_key may only contain ASCII letters, digits, '-' and '_', got '{}'",
                self.slot_key
            )));
        }

        Ok(())
    }
}

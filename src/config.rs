//! File-backed settings store
//!
//! This module persists the settings key-value document using `confy`, which picks the
//! OS-specific config directory and handles (de)serialization. Every write is stored
//! immediately so values survive across sessions.

use crate::constant::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, SETTINGS_FILE_NAME};
use crate::store::{SettingsStore, StoredValue};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),
}

/// On-disk layout of the settings file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default)]
    pub values: BTreeMap<String, StoredValue>,
}

pub struct ConfigStore {
    path: PathBuf,
    document: SettingsDocument,
}

impl ConfigStore {
    /// Load the settings file from the OS config directory, creating it if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::load_from(path)
    }

    /// Load the settings file at an explicit location
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let document: SettingsDocument = confy::load_path(&path)?;
        info!("Load settings from {:?}", path);
        Ok(Self { path, document })
    }

    /// Save current document to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store_path(&self.path, &self.document)?;
        info!("Save settings to {:?}", self.path);
        Ok(())
    }

    /// Get the default settings file path
    /// Falls back to confy's own location if platform dirs are unavailable
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) {
            Ok(proj_dirs.config_dir().join(SETTINGS_FILE_NAME))
        } else {
            Ok(confy::get_configuration_file_path(APP_NAME, None)?)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &SettingsDocument {
        &self.document
    }
}

impl SettingsStore for ConfigStore {
    fn get(&self, key: &str) -> Option<StoredValue> {
        self.document.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: StoredValue) {
        self.document.values.insert(key.to_string(), value);

        // The in-memory value stays authoritative for this session even if the write fails
        if let Err(e) = self.save() {
            tracing::error!("Failed to save setting {}: {}", key, e);
        }
    }
}

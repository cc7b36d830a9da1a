use serde::{Deserialize, Serialize};
use crate::{PersonaError, Result};

pub const DEFAULT_KEY_PREFIX: &str = "persona:versions:";

/// Storage key of the persisted `WorkbenchConfig`
pub const CONFIG_STORAGE_KEY: &str = "workbench:config";

/// Top-level workbench configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbenchConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_true")]
    pub shortcuts_enabled: bool,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            theme: ThemeMode::default(),
            shortcuts_enabled: true,
        }
    }
}

impl WorkbenchConfig {
    /// A history prefix must be non-empty and must not cover the config key,
    /// or the config record would be listed as a persona's history.
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.storage.key_prefix;
        if prefix.trim().is_empty() {
            return Err(PersonaError::Config(
                "storage key prefix must not be empty".to_string(),
            ));
        }
        if CONFIG_STORAGE_KEY.starts_with(prefix.as_str()) {
            return Err(PersonaError::Config(format!(
                "storage key prefix \"{}\" overlaps the config key {}",
                prefix, CONFIG_STORAGE_KEY
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
    /// Prepended to the persona id to form the history key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Auto,
            key_prefix: default_key_prefix(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// localStorage when available, memory otherwise
    Auto,
    Memory,
    LocalStorage,
}

impl StorageBackendType {
    pub fn all() -> &'static [StorageBackendType] {
        &[
            StorageBackendType::Auto,
            StorageBackendType::Memory,
            StorageBackendType::LocalStorage,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            StorageBackendType::Auto => "Auto-detect",
            StorageBackendType::Memory => "Memory",
            StorageBackendType::LocalStorage => "Local Storage",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

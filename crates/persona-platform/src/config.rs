//! Persisted workbench configuration.

use persona_core::ports::KeyValuePort;
use persona_types::{config::WorkbenchConfig, Result};

pub use persona_types::config::CONFIG_STORAGE_KEY;

/// Load the saved config. Missing, corrupt, or invalid data yields the
/// defaults so start-up never fails on a bad config.
pub fn load_config(storage: &dyn KeyValuePort) -> WorkbenchConfig {
    let raw = match storage.get(CONFIG_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return WorkbenchConfig::default(),
        Err(e) => {
            log::warn!("Could not read config: {}", e);
            return WorkbenchConfig::default();
        }
    };

    match serde_json::from_str::<WorkbenchConfig>(&raw) {
        Ok(config) => match config.validate() {
            Ok(()) => {
                log::info!("Config restored from storage");
                config
            }
            Err(e) => {
                log::warn!("Stored config rejected ({}), using defaults", e);
                WorkbenchConfig::default()
            }
        },
        Err(e) => {
            log::warn!("Stored config is corrupt ({}), using defaults", e);
            WorkbenchConfig::default()
        }
    }
}

pub fn save_config(storage: &dyn KeyValuePort, config: &WorkbenchConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_string(config)?;
    storage.set(CONFIG_STORAGE_KEY, &json)?;
    log::info!("Config saved to storage");
    Ok(())
}

//! Pick a storage backend from config.
//!
//! Priority for `Auto`: localStorage → Memory (fallback)

use std::rc::Rc;
use persona_core::ports::KeyValuePort;
use persona_types::{config::StorageBackendType, Result};
use super::{LocalStorageStore, MemoryStore};

/// Open the configured backend, falling back to memory when a persistent
/// one cannot be opened. Returns a trait object so callers are
/// backend-agnostic.
pub fn auto_detect_storage(backend: &StorageBackendType) -> Rc<dyn KeyValuePort> {
    match backend {
        StorageBackendType::Memory => {
            log::info!("Storage backend: memory (configured)");
            Rc::new(MemoryStore::new())
        }
        StorageBackendType::Auto | StorageBackendType::LocalStorage => match open_local() {
            Ok(local) => {
                log::info!("Storage backend: localStorage");
                Rc::new(local)
            }
            Err(e) => {
                log::warn!("localStorage unavailable ({}), falling back to memory", e);
                Rc::new(MemoryStore::new())
            }
        },
    }
}

fn open_local() -> Result<LocalStorageStore> {
    if cfg!(target_arch = "wasm32") {
        LocalStorageStore::open()
    } else {
        Err(persona_types::PersonaError::Storage(
            "not running in a browser".to_string(),
        ))
    }
}

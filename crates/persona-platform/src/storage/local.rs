//! `window.localStorage` backend.
//! Persistent across page reloads; synchronous, string-valued.

use persona_core::ports::KeyValuePort;
use persona_types::{PersonaError, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Open the origin's localStorage. Fails outside a browser window or
    /// when storage is disabled (e.g. some private browsing modes).
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| PersonaError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| PersonaError::Storage("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

impl KeyValuePort for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // QuotaExceededError lands here
        self.storage.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_err)
    }

    fn keys(&self, prefix: &str) -> Result<Vec<String>> {
        let len = self.storage.length().map_err(js_err)?;
        let mut keys = Vec::new();
        for i in 0..len {
            if let Some(key) = self.storage.key(i).map_err(js_err)? {
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}

fn js_err(e: JsValue) -> PersonaError {
    PersonaError::Storage(format!("{:?}", e))
}

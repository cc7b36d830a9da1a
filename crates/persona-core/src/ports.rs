//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `persona-core` (pure Rust).
//! Browser implementations live in `persona-platform`; the composition
//! root in `persona-app` injects them.

use persona_types::{persona::PersonaConfig, Result};

// ─── Key-Value Port ──────────────────────────────────────────

/// String-keyed, string-valued persistent store (localStorage or equivalent).
///
/// Calls complete synchronously; a successful `set` is durable from the
/// caller's point of view.
pub trait KeyValuePort {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Keys starting with `prefix`, in no particular order
    fn keys(&self, prefix: &str) -> Result<Vec<String>>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Live Persona Port ───────────────────────────────────────

/// The editing buffer holding each persona's current configuration.
pub trait LivePersonaPort {
    fn current(&self, persona_id: &str) -> Option<PersonaConfig>;

    fn replace(&self, persona_id: &str, config: PersonaConfig);
}

// ─── Clock Port ──────────────────────────────────────────────

pub trait ClockPort {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

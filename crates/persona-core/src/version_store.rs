//! Persona version store.
//!
//! Each persona's history lives under one storage key as a JSON array of
//! `{timestamp, data, notes}` records, newest first:
//!   persona id "abc" → "persona:versions:abc"
//!
//! Every call reads the list, changes it, and writes it back before
//! returning. There is a single writer (the UI thread), so no caller can
//! observe a half-updated list.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use persona_types::{
    config::DEFAULT_KEY_PREFIX,
    event::WorkbenchEvent,
    persona::PersonaConfig,
    version::PersonaVersion,
    PersonaError, Result,
};
use crate::event_bus::EventBus;
use crate::ports::{ClockPort, KeyValuePort, LivePersonaPort};

pub struct VersionStore {
    storage: Rc<dyn KeyValuePort>,
    live: Rc<dyn LivePersonaPort>,
    clock: Rc<dyn ClockPort>,
    event_bus: EventBus,
    key_prefix: String,
    /// Keys whose corruption has already been reported
    reported_corrupt: RefCell<HashSet<String>>,
}

impl VersionStore {
    pub fn new(
        storage: Rc<dyn KeyValuePort>,
        live: Rc<dyn LivePersonaPort>,
        clock: Rc<dyn ClockPort>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            storage,
            live,
            clock,
            event_bus,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            reported_corrupt: RefCell::new(HashSet::new()),
        }
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    fn key_for(&self, persona_id: &str) -> String {
        format!("{}{}", self.key_prefix, persona_id)
    }

    // ─── Queries ─────────────────────────────────────────────

    /// History of a persona, newest first. Unknown personas, unreadable
    /// storage, and corrupt records all yield an empty list.
    pub fn list_versions(&self, persona_id: &str) -> Vec<PersonaVersion> {
        match self.load(persona_id) {
            Ok(versions) => versions,
            Err(e) => {
                log::warn!("Could not read history for {}: {}", persona_id, e);
                Vec::new()
            }
        }
    }

    pub fn latest(&self, persona_id: &str) -> Option<PersonaVersion> {
        self.list_versions(persona_id).into_iter().next()
    }

    pub fn find(&self, persona_id: &str, timestamp: i64) -> Option<PersonaVersion> {
        self.list_versions(persona_id)
            .into_iter()
            .find(|v| v.timestamp == timestamp)
    }

    /// Ids of every persona with a stored history entry
    pub fn personas_with_history(&self) -> Result<Vec<String>> {
        let mut ids: Vec<String> = self
            .storage
            .keys(&self.key_prefix)?
            .into_iter()
            .filter_map(|key| key.strip_prefix(&self.key_prefix).map(str::to_string))
            .filter(|id| !id.is_empty())
            .collect();
        ids.sort();
        Ok(ids)
    }

    // ─── Mutations ───────────────────────────────────────────

    /// Snapshot the persona's live configuration.
    ///
    /// The new timestamp is strictly greater than every earlier version of
    /// the same persona, even when the clock has not advanced.
    pub fn save_version(&self, persona_id: &str, note: Option<&str>) -> Result<PersonaVersion> {
        let config = self
            .live
            .current(persona_id)
            .ok_or_else(|| PersonaError::UnknownPersona(persona_id.to_string()))?;

        let mut versions = self.load(persona_id)?;
        let newest = versions.first().map(|v| v.timestamp);
        let timestamp = next_timestamp(self.clock.now_millis(), newest)?;
        let notes = note
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let version = PersonaVersion::new(timestamp, config, notes);
        versions.insert(0, version.clone());
        self.persist(persona_id, &versions)?;

        log::info!(
            "Saved version {} for persona {} ({} total)",
            timestamp,
            persona_id,
            versions.len()
        );
        self.event_bus.emit(WorkbenchEvent::VersionSaved {
            persona_id: persona_id.to_string(),
            timestamp,
            notes: version.notes.clone(),
        });
        Ok(version)
    }

    /// Overwrite the live configuration with a copy of a snapshot.
    /// History is left as it is.
    pub fn restore_version(&self, persona_id: &str, timestamp: i64) -> Result<PersonaConfig> {
        let version = self
            .load(persona_id)?
            .into_iter()
            .find(|v| v.timestamp == timestamp)
            .ok_or_else(|| not_found(persona_id, timestamp))?;

        self.live.replace(persona_id, version.data.clone());

        log::info!("Restored persona {} to version {}", persona_id, timestamp);
        self.event_bus.emit(WorkbenchEvent::VersionRestored {
            persona_id: persona_id.to_string(),
            timestamp,
        });
        Ok(version.data)
    }

    pub fn delete_version(&self, persona_id: &str, timestamp: i64) -> Result<()> {
        let mut versions = self.load(persona_id)?;
        let before = versions.len();
        versions.retain(|v| v.timestamp != timestamp);
        if versions.len() == before {
            return Err(not_found(persona_id, timestamp));
        }
        self.persist(persona_id, &versions)?;

        log::info!("Deleted version {} of persona {}", timestamp, persona_id);
        self.event_bus.emit(WorkbenchEvent::VersionDeleted {
            persona_id: persona_id.to_string(),
            timestamp,
        });
        Ok(())
    }

    /// Drop a persona's whole history. Returns how many versions were removed.
    pub fn clear_history(&self, persona_id: &str) -> Result<usize> {
        let removed = self.list_versions(persona_id).len();
        let key = self.key_for(persona_id);
        self.storage.remove(&key)?;
        self.reported_corrupt.borrow_mut().remove(&key);
        log::info!("Cleared {} versions of persona {}", removed, persona_id);
        Ok(removed)
    }

    // ─── Storage ─────────────────────────────────────────────

    /// Read a persona's history. Storage failures propagate; undecodable
    /// data is reported once and read as empty.
    fn load(&self, persona_id: &str) -> Result<Vec<PersonaVersion>> {
        let key = self.key_for(persona_id);
        let raw = match self.storage.get(&key)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str::<Vec<PersonaVersion>>(&raw) {
            Ok(mut versions) => {
                versions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                versions.dedup_by_key(|v| v.timestamp);
                Ok(versions)
            }
            Err(e) => {
                if self.reported_corrupt.borrow_mut().insert(key.clone()) {
                    log::warn!(
                        "Corrupt version history at {} ({}), treating as empty",
                        key,
                        e
                    );
                    self.event_bus.emit(WorkbenchEvent::HistoryCorrupt {
                        persona_id: persona_id.to_string(),
                        message: e.to_string(),
                    });
                }
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, persona_id: &str, versions: &[PersonaVersion]) -> Result<()> {
        let key = self.key_for(persona_id);
        if versions.is_empty() {
            self.storage.remove(&key)?;
        } else {
            let json = serde_json::to_string(versions)?;
            self.storage.set(&key, &json)?;
        }
        self.reported_corrupt.borrow_mut().remove(&key);
        Ok(())
    }
}

/// Clock time, bumped past `newest` when the clock has stalled or gone back.
/// Fails when no stamp greater than `newest` exists.
pub fn next_timestamp(now: i64, newest: Option<i64>) -> Result<i64> {
    match newest {
        Some(newest) if now <= newest => newest
            .checked_add(1)
            .ok_or(PersonaError::TimestampExhausted(newest)),
        _ => Ok(now),
    }
}

fn not_found(persona_id: &str, timestamp: i64) -> PersonaError {
    PersonaError::NotFound {
        persona_id: persona_id.to_string(),
        timestamp,
    }
}

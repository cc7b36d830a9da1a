//! In-memory live persona buffer.
//!
//! Holds the configuration each persona is currently being edited to.
//! Shared between the editor (which mutates it every frame) and the
//! version store (which snapshots and overwrites it).

use std::cell::RefCell;
use std::rc::Rc;
use persona_types::persona::{new_persona_id, PersonaConfig};
use crate::ports::LivePersonaPort;

/// Clone-cheap via Rc. Personas keep their creation order.
#[derive(Clone, Default)]
pub struct LivePersonas {
    entries: Rc<RefCell<Vec<(String, PersonaConfig)>>>,
}

impl LivePersonas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a persona with a fresh id and default settings
    pub fn create(&self, name: impl Into<String>) -> String {
        let id = new_persona_id();
        self.insert(&id, PersonaConfig::named(name));
        id
    }

    /// Insert or overwrite under a known id
    pub fn insert(&self, persona_id: &str, config: PersonaConfig) {
        let mut entries = self.entries.borrow_mut();
        match entries.iter_mut().find(|(id, _)| id == persona_id) {
            Some((_, existing)) => *existing = config,
            None => entries.push((persona_id.to_string(), config)),
        }
    }

    pub fn remove(&self, persona_id: &str) -> Option<PersonaConfig> {
        let mut entries = self.entries.borrow_mut();
        let pos = entries.iter().position(|(id, _)| id == persona_id)?;
        Some(entries.remove(pos).1)
    }

    pub fn ids(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|(id, _)| id.clone()).collect()
    }

    /// `(id, display name)` pairs for pickers
    pub fn summaries(&self) -> Vec<(String, String)> {
        self.entries
            .borrow()
            .iter()
            .map(|(id, config)| (id.clone(), config.name.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl LivePersonaPort for LivePersonas {
    fn current(&self, persona_id: &str) -> Option<PersonaConfig> {
        self.entries
            .borrow()
            .iter()
            .find(|(id, _)| id == persona_id)
            .map(|(_, config)| config.clone())
    }

    fn replace(&self, persona_id: &str, config: PersonaConfig) {
        self.insert(persona_id, config);
    }
}

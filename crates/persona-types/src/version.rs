use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use crate::persona::PersonaConfig;
use crate::schema::{FieldValue, PersonaField};

/// An immutable snapshot of a persona's configuration.
///
/// `timestamp` is milliseconds since the Unix epoch and doubles as the
/// version's identifier within its persona's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaVersion {
    pub timestamp: i64,
    pub data: PersonaConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PersonaVersion {
    pub fn new(timestamp: i64, data: PersonaConfig, notes: Option<String>) -> Self {
        Self { timestamp, data, notes }
    }

    /// Local wall-clock time of the save, e.g. `2024-03-01 14:05:09`
    pub fn saved_at_label(&self) -> String {
        match Local.timestamp_millis_opt(self.timestamp).single() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.timestamp.to_string(),
        }
    }

    pub fn notes_or_default(&self) -> &str {
        self.notes.as_deref().unwrap_or("(no notes)")
    }
}

/// One changed field between two configurations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDiff {
    pub field: PersonaField,
    pub before: FieldValue,
    pub after: FieldValue,
}

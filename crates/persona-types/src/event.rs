use serde::{Deserialize, Serialize};

/// Events emitted by the version store.
/// UI drains these each frame for notifications and refreshes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkbenchEvent {
    /// A snapshot was appended to a persona's history
    VersionSaved {
        persona_id: String,
        timestamp: i64,
        notes: Option<String>,
    },

    /// The live configuration was overwritten from a snapshot
    VersionRestored { persona_id: String, timestamp: i64 },

    /// A snapshot was removed
    VersionDeleted { persona_id: String, timestamp: i64 },

    /// Stored history could not be decoded and was treated as empty
    HistoryCorrupt { persona_id: String, message: String },

    /// An operation failed
    Error { message: String },
}

impl WorkbenchEvent {
    pub fn persona_id(&self) -> Option<&str> {
        match self {
            WorkbenchEvent::VersionSaved { persona_id, .. }
            | WorkbenchEvent::VersionRestored { persona_id, .. }
            | WorkbenchEvent::VersionDeleted { persona_id, .. }
            | WorkbenchEvent::HistoryCorrupt { persona_id, .. } => Some(persona_id),
            WorkbenchEvent::Error { .. } => None,
        }
    }
}

//! UI-level state that drives rendering.
//! Selection, input buffers, and inline notifications. Updated each frame
//! by draining the EventBus; the version store itself knows nothing of it.

use persona_types::{
    event::WorkbenchEvent,
    persona::PersonaConfig,
    version::PersonaVersion,
    PersonaError,
};

const MAX_NOTIFICATIONS: usize = 5;

/// What the selected version is diffed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareTarget {
    /// The next older saved version
    #[default]
    Previous,
    /// The live editing state
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NoticeLevel,
    pub message: String,
}

/// State visible to UI panels
pub struct UiState {
    pub selected_persona: Option<String>,
    pub selected_version: Option<i64>,
    pub compare_target: CompareTarget,
    /// Note for the next saved version
    pub note_input: String,
    /// Comma-separated knowledge domains being typed
    pub domains_input: String,
    pub notifications: Vec<Notification>,
    pub show_history: bool,
    pub show_settings: bool,
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            selected_persona: None,
            selected_version: None,
            compare_target: CompareTarget::Previous,
            note_input: String::new(),
            domains_input: String::new(),
            notifications: Vec::new(),
            show_history: true,
            show_settings: false,
            status_text: "Ready".to_string(),
        }
    }

    /// Process events from the EventBus. Returns true when the selected
    /// persona's history changed and should be re-read.
    pub fn process_events(&mut self, events: Vec<WorkbenchEvent>) -> bool {
        let mut history_changed = false;
        for event in events {
            let ours = event.persona_id().is_some()
                && event.persona_id() == self.selected_persona.as_deref();
            match event {
                WorkbenchEvent::VersionSaved { timestamp, notes, .. } => {
                    if ours {
                        self.selected_version = Some(timestamp);
                        self.note_input.clear();
                        history_changed = true;
                    }
                    let label = notes.unwrap_or_else(|| "untitled".to_string());
                    self.status_text = format!("Saved version \"{}\"", label);
                    self.notify(NoticeLevel::Success, self.status_text.clone());
                }
                WorkbenchEvent::VersionRestored { .. } => {
                    self.status_text = "Version restored".to_string();
                    self.notify(NoticeLevel::Success, "Version restored");
                }
                WorkbenchEvent::VersionDeleted { .. } => {
                    history_changed |= ours;
                    self.status_text = "Version deleted".to_string();
                    self.notify(NoticeLevel::Info, "Version deleted");
                }
                WorkbenchEvent::HistoryCorrupt { message, .. } => {
                    history_changed |= ours;
                    self.notify(
                        NoticeLevel::Error,
                        format!("Saved history could not be read and was reset: {}", message),
                    );
                }
                WorkbenchEvent::Error { message } => {
                    self.status_text = format!("Error: {}", message);
                    self.notify(NoticeLevel::Error, message);
                }
            }
        }
        history_changed
    }

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notifications.push(Notification {
            level,
            message: message.into(),
        });
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let excess = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..excess);
        }
    }

    pub fn notify_error(&mut self, err: &PersonaError) {
        log::error!("{}", err);
        self.status_text = format!("Error: {}", err);
        self.notify(NoticeLevel::Error, err.to_string());
    }

    pub fn dismiss_notifications(&mut self) {
        self.notifications.clear();
    }

    /// Switch personas, dropping per-persona selection and inputs
    pub fn select_persona(&mut self, persona_id: &str, config: &PersonaConfig) {
        self.selected_persona = Some(persona_id.to_string());
        self.selected_version = None;
        self.note_input.clear();
        self.sync_domains(config);
    }

    /// Refill the domains buffer from a config (after restore or switch)
    pub fn sync_domains(&mut self, config: &PersonaConfig) {
        self.domains_input = config.knowledge_domains.join(", ");
    }

    /// Move the selection off a version that is being deleted.
    ///
    /// `versions` is the history before the deletion, newest first. The
    /// next older version takes the selection, else the next newer one.
    pub fn select_after_delete(&mut self, versions: &[PersonaVersion], deleted: i64) {
        if self.selected_version != Some(deleted) {
            return;
        }
        self.selected_version = next_selection(versions, deleted);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// The neighbour of `deleted` that should be selected once it is gone
pub fn next_selection(versions: &[PersonaVersion], deleted: i64) -> Option<i64> {
    let pos = versions.iter().position(|v| v.timestamp == deleted)?;
    versions
        .get(pos + 1)
        .or_else(|| pos.checked_sub(1).and_then(|i| versions.get(i)))
        .map(|v| v.timestamp)
}

//! Keyboard shortcut bindings.
//!
//! `Ctrl` and `Cmd` are treated as the same modifier so bindings read the
//! same on every platform.

use egui::{Event, Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutAction {
    SaveVersion,
    ToggleHistory,
    ToggleSettings,
    DismissNotifications,
}

impl ShortcutAction {
    pub fn label(&self) -> &'static str {
        match self {
            ShortcutAction::SaveVersion => "Save version",
            ShortcutAction::ToggleHistory => "Toggle history",
            ShortcutAction::ToggleSettings => "Toggle settings",
            ShortcutAction::DismissNotifications => "Dismiss notifications",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    pub command: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    pub const fn new(key: Key) -> Self {
        Self { key, command: false, shift: false, alt: false }
    }

    pub const fn command(key: Key) -> Self {
        Self { key, command: true, shift: false, alt: false }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        let command = modifiers.command || modifiers.ctrl || modifiers.mac_cmd;
        self.key == key
            && self.command == command
            && self.shift == modifiers.shift
            && self.alt == modifiers.alt
    }

    /// e.g. `Ctrl+Shift+H`
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.command {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.alt {
            parts.push("Alt");
        }
        parts.push(self.key.name());
        parts.join("+")
    }
}

pub struct ShortcutMap {
    bindings: Vec<(KeyChord, ShortcutAction)>,
}

impl ShortcutMap {
    pub fn empty() -> Self {
        Self { bindings: Vec::new() }
    }

    /// Bind a chord, replacing whatever it was bound to before
    pub fn bind(&mut self, chord: KeyChord, action: ShortcutAction) {
        self.bindings.retain(|(c, _)| *c != chord);
        self.bindings.push((chord, action));
    }

    pub fn unbind(&mut self, action: ShortcutAction) {
        self.bindings.retain(|(_, a)| *a != action);
    }

    pub fn action_for(&self, key: Key, modifiers: Modifiers) -> Option<ShortcutAction> {
        self.bindings
            .iter()
            .find(|(chord, _)| chord.matches(key, modifiers))
            .map(|(_, action)| *action)
    }

    pub fn chord_for(&self, action: ShortcutAction) -> Option<KeyChord> {
        self.bindings
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(chord, _)| *chord)
    }

    pub fn bindings(&self) -> &[(KeyChord, ShortcutAction)] {
        &self.bindings
    }

    /// Actions triggered by this frame's key presses, in press order
    pub fn dispatch(&self, ctx: &egui::Context) -> Vec<ShortcutAction> {
        ctx.input(|i| self.actions_for_events(&i.events))
    }

    pub fn actions_for_events(&self, events: &[Event]) -> Vec<ShortcutAction> {
        events
            .iter()
            .filter_map(|event| match event {
                Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => self.action_for(*key, *modifiers),
                _ => None,
            })
            .collect()
    }
}

impl Default for ShortcutMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind(KeyChord::command(Key::S), ShortcutAction::SaveVersion);
        map.bind(KeyChord::command(Key::H).with_shift(), ShortcutAction::ToggleHistory);
        map.bind(KeyChord::command(Key::Comma), ShortcutAction::ToggleSettings);
        map.bind(KeyChord::new(Key::Escape), ShortcutAction::DismissNotifications);
        map
    }
}

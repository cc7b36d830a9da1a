//! Main egui application — composes all panels and owns the version store.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use persona_core::event_bus::EventBus;
use persona_core::live::LivePersonas;
use persona_core::ports::{KeyValuePort, LivePersonaPort};
use persona_core::version_store::VersionStore;
use persona_platform::clock::SystemClock;
use persona_platform::config::{load_config, save_config};
use persona_platform::storage::auto_detect_storage;
use persona_types::config::{StorageBackendType, ThemeMode, WorkbenchConfig};
use persona_types::event::WorkbenchEvent;
use persona_types::PersonaError;
use persona_types::persona::PersonaConfig;
use persona_types::version::PersonaVersion;
use persona_ui::panels::history::{history_panel, HistoryAction};
use persona_ui::panels::settings::{settings_panel, SaveFeedback, SettingsAction};
use persona_ui::panels::editor;
use persona_ui::shortcuts::{ShortcutAction, ShortcutMap};
use persona_ui::state::{NoticeLevel, UiState};
use persona_ui::theme;

const DEFAULT_PERSONA_NAME: &str = "Assistant";

pub struct WorkbenchApp {
    ui_state: UiState,
    config: WorkbenchConfig,
    /// Where the config itself lives; always the auto-detected backend
    config_storage: Rc<dyn KeyValuePort>,
    event_bus: EventBus,
    live: LivePersonas,
    store: VersionStore,
    shortcuts: ShortcutMap,
    /// History of the selected persona, re-read only when it changes
    versions: Vec<PersonaVersion>,
    save_feedback: Option<SaveFeedback>,
    applied_theme: Option<ThemeMode>,
}

impl WorkbenchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config_storage = auto_detect_storage(&StorageBackendType::Auto);
        let config = load_config(config_storage.as_ref());

        let storage = match config.storage.backend {
            StorageBackendType::Memory => auto_detect_storage(&StorageBackendType::Memory),
            StorageBackendType::Auto | StorageBackendType::LocalStorage => config_storage.clone(),
        };
        log::info!("History stored in {}", storage.backend_name());

        let event_bus = EventBus::new();
        let live = LivePersonas::new();
        let store = VersionStore::new(
            storage,
            Rc::new(live.clone()),
            Rc::new(SystemClock),
            event_bus.clone(),
        )
        .with_key_prefix(config.storage.key_prefix.clone());

        let mut app = Self {
            ui_state: UiState::new(),
            config,
            config_storage,
            event_bus,
            live,
            store,
            shortcuts: ShortcutMap::default(),
            versions: Vec::new(),
            save_feedback: None,
            applied_theme: None,
        };
        app.load_personas();
        app
    }

    /// Seed the live buffer from the newest snapshot of every persona with
    /// history, or a single default persona on first run.
    fn load_personas(&mut self) {
        match self.store.personas_with_history() {
            Ok(ids) => {
                for id in ids {
                    if let Some(latest) = self.store.latest(&id) {
                        self.live.insert(&id, latest.data);
                    }
                }
            }
            Err(e) => self.ui_state.notify_error(&e),
        }

        if self.live.is_empty() {
            self.live.create(DEFAULT_PERSONA_NAME);
        }
        log::info!("Loaded {} persona(s)", self.live.len());

        if let Some(first) = self.live.ids().into_iter().next() {
            self.select_persona(&first);
        }
    }

    fn select_persona(&mut self, persona_id: &str) {
        let config = self.live.current(persona_id).unwrap_or_default();
        self.ui_state.select_persona(persona_id, &config);
        self.refresh_versions();
    }

    fn refresh_versions(&mut self) {
        self.versions = match &self.ui_state.selected_persona {
            Some(id) => self.store.list_versions(id),
            None => Vec::new(),
        };
    }

    fn selected_config(&self) -> Option<(String, PersonaConfig)> {
        let id = self.ui_state.selected_persona.clone()?;
        let config = self.live.current(&id)?;
        Some((id, config))
    }

    // ─── Version actions ─────────────────────────────────────

    fn save_version(&mut self, note: &str) {
        let Some(id) = self.ui_state.selected_persona.clone() else {
            return;
        };
        if let Err(e) = self.store.save_version(&id, Some(note)) {
            self.report(e);
        }
    }

    fn restore_version(&mut self, timestamp: i64) {
        let Some(id) = self.ui_state.selected_persona.clone() else {
            return;
        };
        match self.store.restore_version(&id, timestamp) {
            Ok(config) => self.ui_state.sync_domains(&config),
            Err(e) => self.report(e),
        }
    }

    fn delete_version(&mut self, timestamp: i64) {
        let Some(id) = self.ui_state.selected_persona.clone() else {
            return;
        };
        match self.store.delete_version(&id, timestamp) {
            Ok(()) => {
                self.ui_state.select_after_delete(&self.versions, timestamp);
                self.refresh_versions();
            }
            Err(e) => {
                self.report(e);
                self.refresh_versions();
            }
        }
    }

    /// Failed version actions surface as inline notifications via the bus
    fn report(&self, err: PersonaError) {
        log::error!("Version action failed: {}", err);
        self.event_bus.emit(WorkbenchEvent::Error {
            message: err.to_string(),
        });
    }

    fn handle_history_action(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::None => {}
            HistoryAction::Save { note } => self.save_version(&note),
            HistoryAction::Restore(ts) => self.restore_version(ts),
            HistoryAction::Delete(ts) => self.delete_version(ts),
        }
    }

    fn handle_shortcut(&mut self, action: ShortcutAction) {
        match action {
            ShortcutAction::SaveVersion => {
                let note = self.ui_state.note_input.clone();
                self.save_version(&note);
            }
            ShortcutAction::ToggleHistory => {
                self.ui_state.show_history = !self.ui_state.show_history;
            }
            ShortcutAction::ToggleSettings => {
                self.ui_state.show_settings = !self.ui_state.show_settings;
            }
            ShortcutAction::DismissNotifications => self.ui_state.dismiss_notifications(),
        }
    }

    fn save_settings(&mut self) {
        self.save_feedback = Some(match save_config(self.config_storage.as_ref(), &self.config) {
            Ok(()) => SaveFeedback {
                message: "Saved".to_string(),
                success: true,
            },
            Err(e) => {
                log::error!("Settings not saved: {}", e);
                SaveFeedback {
                    message: e.to_string(),
                    success: false,
                }
            }
        });
    }

    fn new_persona(&mut self) {
        let id = self.live.create(DEFAULT_PERSONA_NAME);
        self.select_persona(&id);
        self.ui_state.notify(NoticeLevel::Info, "New persona created");
    }
}

impl eframe::App for WorkbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_theme != Some(self.config.theme) {
            theme::apply_theme(ctx, self.config.theme);
            self.applied_theme = Some(self.config.theme);
        }

        if self.config.shortcuts_enabled {
            for action in self.shortcuts.dispatch(ctx) {
                self.handle_shortcut(action);
            }
        }

        // Drain events from the version store
        let events = self.event_bus.drain();
        if !events.is_empty() {
            if self.ui_state.process_events(events) {
                self.refresh_versions();
            }
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Persona Workbench")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();

                let summaries = self.live.summaries();
                let selected_name = summaries
                    .iter()
                    .find(|(id, _)| Some(id) == self.ui_state.selected_persona.as_ref())
                    .map(|(_, name)| name.clone())
                    .unwrap_or_default();
                let mut picked = None;
                egui::ComboBox::from_id_salt("persona_picker")
                    .selected_text(selected_name)
                    .show_ui(ui, |ui| {
                        for (id, name) in &summaries {
                            let current = Some(id) == self.ui_state.selected_persona.as_ref();
                            if ui.selectable_label(current, name.as_str()).clicked() && !current {
                                picked = Some(id.clone());
                            }
                        }
                    });
                if let Some(id) = picked {
                    self.select_persona(&id);
                }
                if ui.button("New").clicked() {
                    self.new_persona();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                    if ui
                        .selectable_label(self.ui_state.show_history, "History")
                        .clicked()
                    {
                        self.ui_state.show_history = !self.ui_state.show_history;
                    }
                    ui.label(RichText::new(&self.ui_state.status_text).small().weak());
                });
            });
        });

        // ── Notifications ────────────────────────────────────
        if !self.ui_state.notifications.is_empty() {
            TopBottomPanel::bottom("notifications").show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for n in &self.ui_state.notifications {
                        let color = match n.level {
                            NoticeLevel::Info => theme::ACCENT,
                            NoticeLevel::Success => theme::SUCCESS,
                            NoticeLevel::Error => theme::ERROR,
                        };
                        ui.label(RichText::new(&n.message).color(color).small());
                        ui.separator();
                    }
                });
                if ui.small_button("Dismiss").clicked() {
                    self.ui_state.dismiss_notifications();
                }
            });
        }

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(260.0)
                .max_width(320.0)
                .show(ctx, |ui| {
                    match settings_panel(
                        ui,
                        &mut self.config,
                        &self.shortcuts,
                        self.save_feedback.as_ref(),
                    ) {
                        SettingsAction::None => {}
                        SettingsAction::Changed => self.save_feedback = None,
                        SettingsAction::SaveClicked => self.save_settings(),
                    }
                });
        }

        // ── History side panel ───────────────────────────────
        if self.ui_state.show_history {
            if let Some((_, live_config)) = self.selected_config() {
                SidePanel::right("history_panel")
                    .min_width(340.0)
                    .default_width(420.0)
                    .show(ctx, |ui| {
                        let action =
                            history_panel(ui, &mut self.ui_state, &self.versions, &live_config);
                        self.handle_history_action(action);
                    });
            }
        }

        // ── Editor ───────────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| match self.selected_config() {
            Some((id, mut config)) => {
                if editor::persona_editor(ui, &mut config, &mut self.ui_state.domains_input) {
                    self.live.replace(&id, config);
                }
            }
            None => {
                ui.label(RichText::new("No persona selected").weak());
            }
        });
    }
}

//! Settings panel — theme, storage backend, keyboard shortcuts.
//! Explicit Save button with visual feedback.

use egui::{self, RichText, Vec2};
use persona_types::config::{StorageBackendType, ThemeMode, WorkbenchConfig};
use crate::shortcuts::ShortcutMap;
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A field was changed (applied immediately, not yet saved)
    Changed,
    /// The user clicked the explicit Save button
    SaveClicked,
}

/// Save feedback passed in from the app layer
#[derive(Clone)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

/// Render the settings panel. Returns an action for the caller to handle.
pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut WorkbenchConfig,
    shortcuts: &ShortcutMap,
    save_feedback: Option<&SaveFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut save_clicked = false;

    egui::Frame::default()
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").strong());
            ui.separator();

            // ── Appearance ───────────────────────────────────
            ui.label(RichText::new("Appearance").color(ACCENT).strong());
            ui.label(RichText::new("Theme").small().weak());
            ui.horizontal(|ui| {
                for mode in [ThemeMode::Dark, ThemeMode::Light] {
                    if ui
                        .selectable_value(&mut config.theme, mode, mode.label())
                        .changed()
                    {
                        changed = true;
                    }
                }
            });

            ui.add_space(12.0);
            ui.separator();

            // ── Storage ──────────────────────────────────────
            ui.label(RichText::new("Storage").color(ACCENT).strong());
            ui.label(RichText::new("Backend").small().weak());
            egui::ComboBox::from_id_salt("storage_backend")
                .selected_text(config.storage.backend.label())
                .show_ui(ui, |ui| {
                    for backend in StorageBackendType::all() {
                        if ui
                            .selectable_value(
                                &mut config.storage.backend,
                                backend.clone(),
                                backend.label(),
                            )
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });
            ui.label(
                RichText::new(storage_description(&config.storage.backend))
                    .small()
                    .italics()
                    .weak(),
            );

            ui.add_space(4.0);
            ui.label(RichText::new("History key prefix").small().weak());
            if ui
                .text_edit_singleline(&mut config.storage.key_prefix)
                .changed()
            {
                changed = true;
            }
            ui.label(
                RichText::new("Storage changes take effect after reload.")
                    .small()
                    .italics()
                    .weak(),
            );

            ui.add_space(12.0);
            ui.separator();

            // ── Shortcuts ────────────────────────────────────
            ui.label(RichText::new("Keyboard").color(ACCENT).strong());
            if ui
                .checkbox(&mut config.shortcuts_enabled, "Enable keyboard shortcuts")
                .changed()
            {
                changed = true;
            }
            egui::Grid::new("shortcut_list")
                .num_columns(2)
                .spacing(Vec2::new(16.0, 2.0))
                .show(ui, |ui| {
                    for (chord, action) in shortcuts.bindings() {
                        ui.label(RichText::new(chord.describe()).monospace().small());
                        ui.label(RichText::new(action.label()).small());
                        ui.end_row();
                    }
                });

            // ── Save Button ──────────────────────────────────
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(RichText::new("Save Settings").strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(120.0, 28.0)),
                );
                if btn.clicked() {
                    save_clicked = true;
                }

                if let Some(fb) = save_feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    if save_clicked {
        SettingsAction::SaveClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}

pub fn storage_description(backend: &StorageBackendType) -> &'static str {
    match backend {
        StorageBackendType::Auto => "Uses localStorage when the browser allows it, otherwise memory.",
        StorageBackendType::Memory => "Fast but volatile. All history is lost on page reload.",
        StorageBackendType::LocalStorage => "Persistent browser storage. History survives reloads and restarts.",
    }
}

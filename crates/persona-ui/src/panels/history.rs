//! Version history panel — save with a note, browse versions, diff, restore, delete.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use persona_core::diff::{diff, summarize};
use persona_types::{
    persona::PersonaConfig,
    version::{FieldDiff, PersonaVersion},
};
use crate::state::{CompareTarget, UiState};
use crate::theme::*;

/// What the caller should do after rendering the history panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    None,
    Save { note: String },
    Restore(i64),
    Delete(i64),
}

/// What the diff area shows for the selected version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionDiff {
    /// Nothing selected, or the selection is stale
    Missing,
    /// The oldest version has nothing before it to compare with
    FirstVersion,
    Changes(Vec<FieldDiff>),
}

/// Against `Previous` this is what the selected version changed relative
/// to the one before it. Against `Live` it is what the live config has
/// changed since the selected version.
pub fn diff_for_selection(
    versions: &[PersonaVersion],
    selected: Option<i64>,
    target: CompareTarget,
    live: &PersonaConfig,
) -> SelectionDiff {
    let Some(pos) = selected.and_then(|ts| versions.iter().position(|v| v.timestamp == ts)) else {
        return SelectionDiff::Missing;
    };
    let version = &versions[pos];
    match target {
        CompareTarget::Previous => match versions.get(pos + 1) {
            Some(previous) => SelectionDiff::Changes(diff(&version.data, &previous.data)),
            None => SelectionDiff::FirstVersion,
        },
        CompareTarget::Live => SelectionDiff::Changes(diff(live, &version.data)),
    }
}

/// Render the history panel. Returns an action for the caller to handle.
pub fn history_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    versions: &[PersonaVersion],
    live: &PersonaConfig,
) -> HistoryAction {
    let mut action = HistoryAction::None;

    egui::Frame::default()
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Version History").strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(format!("{} saved", versions.len())).small().weak());
                });
            });
            ui.separator();

            // ── Save ─────────────────────────────────────────
            ui.horizontal(|ui| {
                let note_edit = egui::TextEdit::singleline(&mut state.note_input)
                    .hint_text("Note for this version (optional)")
                    .desired_width(ui.available_width() - 110.0);
                let response = ui.add(note_edit);
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let save = ui.add(
                    egui::Button::new(RichText::new("Save Version").strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(100.0, 24.0)),
                );
                if save.clicked() || enter {
                    action = HistoryAction::Save {
                        note: state.note_input.clone(),
                    };
                }
            });

            ui.add_space(6.0);

            if versions.is_empty() {
                ui.label(
                    RichText::new("No saved versions yet. Save one to start tracking changes.")
                        .italics()
                        .weak(),
                );
                return;
            }

            // ── Version list ─────────────────────────────────
            let list_height = (ui.available_height() * 0.45).max(120.0);
            ScrollArea::vertical()
                .id_salt("version_list")
                .max_height(list_height)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for (i, version) in versions.iter().enumerate() {
                        let selected = state.selected_version == Some(version.timestamp);
                        let title = format!(
                            "{}  {}",
                            version.saved_at_label(),
                            version.notes_or_default()
                        );
                        let mut row = ui.selectable_label(selected, title);
                        if let Some(previous) = versions.get(i + 1) {
                            row = row.on_hover_text(summarize(&diff(&version.data, &previous.data)));
                        }
                        if row.clicked() {
                            state.selected_version = Some(version.timestamp);
                        }
                    }
                });

            ui.separator();

            // ── Selected version ─────────────────────────────
            let Some(selected) = state.selected_version else {
                ui.label(RichText::new("Select a version to compare").weak());
                return;
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new("Compare with").small().weak());
                ui.selectable_value(&mut state.compare_target, CompareTarget::Previous, "Previous version");
                ui.selectable_value(&mut state.compare_target, CompareTarget::Live, "Current edits");
            });

            match diff_for_selection(versions, Some(selected), state.compare_target, live) {
                SelectionDiff::Changes(diffs) => render_diff(ui, &diffs),
                SelectionDiff::FirstVersion => {
                    ui.label(RichText::new("First version").italics().weak());
                }
                SelectionDiff::Missing => {
                    ui.label(RichText::new("Selected version no longer exists").color(WARNING));
                }
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add(egui::Button::new("Restore").corner_radius(PANEL_ROUNDING))
                    .on_hover_text("Replace the current edits with this version")
                    .clicked()
                {
                    action = HistoryAction::Restore(selected);
                }
                if ui
                    .add(
                        egui::Button::new(RichText::new("Delete").color(ERROR))
                            .corner_radius(PANEL_ROUNDING),
                    )
                    .clicked()
                {
                    action = HistoryAction::Delete(selected);
                }
            });
        });

    action
}

fn render_diff(ui: &mut egui::Ui, diffs: &[FieldDiff]) {
    if diffs.is_empty() {
        ui.label(RichText::new("No differences").color(SUCCESS));
        return;
    }

    egui::Grid::new("version_diff")
        .num_columns(3)
        .striped(true)
        .spacing(Vec2::new(12.0, 4.0))
        .show(ui, |ui| {
            ui.label(RichText::new("Field").strong());
            ui.label(RichText::new("Before").strong());
            ui.label(RichText::new("After").strong());
            ui.end_row();

            for d in diffs {
                ui.label(d.field.label());
                ui.label(RichText::new(d.before.display()).color(DIFF_BEFORE));
                ui.label(RichText::new(d.after.display()).color(DIFF_AFTER));
                ui.end_row();
            }
        });
}

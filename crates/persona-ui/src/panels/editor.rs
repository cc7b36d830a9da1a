//! Persona editor — edits every field of the live configuration.

use egui::{self, RichText};
use persona_types::{
    persona::{PersonaConfig, RESPONSE_STYLES, TONES},
    schema::PersonaField,
};
use crate::theme::*;

/// Render the editor. Returns true when any field changed this frame.
pub fn persona_editor(
    ui: &mut egui::Ui,
    config: &mut PersonaConfig,
    domains_input: &mut String,
) -> bool {
    let mut changed = false;

    egui::Frame::default()
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Persona").strong());
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    // ── Identity ─────────────────────────────────
                    ui.label(RichText::new("Identity").color(ACCENT).strong());
                    field_label(ui, PersonaField::Name);
                    changed |= ui.text_edit_singleline(&mut config.name).changed();

                    field_label(ui, PersonaField::Description);
                    changed |= ui
                        .add(egui::TextEdit::multiline(&mut config.description).desired_rows(2))
                        .changed();

                    ui.add_space(8.0);

                    // ── Voice ────────────────────────────────────
                    ui.label(RichText::new("Voice").color(ACCENT).strong());
                    field_label(ui, PersonaField::Tone);
                    changed |= choice_combo(ui, "tone", &mut config.tone, TONES);

                    field_label(ui, PersonaField::ResponseStyle);
                    changed |= choice_combo(ui, "response_style", &mut config.response_style, RESPONSE_STYLES);

                    field_label(ui, PersonaField::KnowledgeDomains);
                    let domains_edit = egui::TextEdit::singleline(domains_input)
                        .hint_text("e.g. rust, databases, testing");
                    if ui.add(domains_edit).changed() {
                        config.knowledge_domains = parse_domains(domains_input);
                        changed = true;
                    }

                    ui.add_space(8.0);

                    // ── Behaviour ────────────────────────────────
                    ui.label(RichText::new("Behaviour").color(ACCENT).strong());
                    for (field, value) in [
                        (PersonaField::Verbosity, &mut config.verbosity),
                        (PersonaField::Creativity, &mut config.creativity),
                        (PersonaField::Formality, &mut config.formality),
                    ] {
                        field_label(ui, field);
                        changed |= ui.add(egui::Slider::new(value, 0..=100)).changed();
                    }

                    changed |= ui
                        .checkbox(&mut config.use_emojis, PersonaField::UseEmojis.label())
                        .changed();
                    changed |= ui
                        .checkbox(&mut config.use_code_examples, PersonaField::UseCodeExamples.label())
                        .changed();

                    ui.add_space(8.0);

                    field_label(ui, PersonaField::CustomInstructions);
                    changed |= ui
                        .add(
                            egui::TextEdit::multiline(&mut config.custom_instructions)
                                .desired_rows(4)
                                .desired_width(f32::INFINITY),
                        )
                        .changed();
                });
        });

    changed
}

/// Split comma-separated input into trimmed, non-empty domains, keeping order
pub fn parse_domains(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}

fn field_label(ui: &mut egui::Ui, field: PersonaField) {
    ui.label(RichText::new(field.label()).small().weak());
}

/// Combo over known values. A value outside the list is kept and shown as-is.
fn choice_combo(ui: &mut egui::Ui, id: &str, value: &mut String, choices: &[&str]) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for choice in choices {
                let selected = value.as_str() == *choice;
                if ui.selectable_label(selected, *choice).clicked() && !selected {
                    *value = choice.to_string();
                    changed = true;
                }
            }
        });
    changed
}

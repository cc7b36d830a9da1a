//! Field-level diff between two persona configurations.

use persona_types::{
    persona::PersonaConfig,
    schema::PersonaField,
    version::FieldDiff,
};

/// Compare `current` against `baseline` over every schema field.
///
/// Each entry's `before` comes from `baseline` and `after` from `current`,
/// so `diff(newer, older)` reads as "what changed since older". Fields
/// whose values are equal (order-sensitive for lists) are omitted.
pub fn diff(current: &PersonaConfig, baseline: &PersonaConfig) -> Vec<FieldDiff> {
    PersonaField::ALL
        .iter()
        .filter_map(|&field| {
            let before = baseline.value_of(field);
            let after = current.value_of(field);
            if before == after {
                None
            } else {
                Some(FieldDiff { field, before, after })
            }
        })
        .collect()
}

/// True when the two configurations differ in no field
pub fn is_unchanged(current: &PersonaConfig, baseline: &PersonaConfig) -> bool {
    diff(current, baseline).is_empty()
}

/// One-line summary for list rows, e.g. `Tone, Verbosity changed`
pub fn summarize(diffs: &[FieldDiff]) -> String {
    match diffs.len() {
        0 => "No changes".to_string(),
        1..=3 => {
            let names: Vec<&str> = diffs.iter().map(|d| d.field.label()).collect();
            format!("{} changed", names.join(", "))
        }
        n => format!("{} fields changed", n),
    }
}

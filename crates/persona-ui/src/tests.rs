#[cfg(test)]
mod tests {
    use crate::panels::editor::parse_domains;
    use crate::panels::history::{diff_for_selection, SelectionDiff};
    use crate::panels::settings::storage_description;
    use crate::shortcuts::*;
    use crate::state::*;
    use crate::theme;
    use egui::{Key, Modifiers};
    use persona_types::config::{StorageBackendType, ThemeMode};
    use persona_types::event::WorkbenchEvent;
    use persona_types::persona::PersonaConfig;
    use persona_types::schema::{FieldValue, PersonaField};
    use persona_types::version::PersonaVersion;
    use persona_types::PersonaError;

    fn version(timestamp: i64, verbosity: i64) -> PersonaVersion {
        PersonaVersion::new(
            timestamp,
            PersonaConfig { verbosity, ..PersonaConfig::default() },
            None,
        )
    }

    /// Newest first, like the store returns them
    fn history() -> Vec<PersonaVersion> {
        vec![version(30, 80), version(20, 60), version(10, 50)]
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.selected_persona.is_none());
        assert!(state.selected_version.is_none());
        assert_eq!(state.compare_target, CompareTarget::Previous);
        assert!(state.notifications.is_empty());
        assert!(state.show_history);
        assert!(!state.show_settings);
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_select_persona_resets_selection() {
        let mut state = UiState::new();
        state.selected_version = Some(5);
        state.note_input = "draft".to_string();
        let config = PersonaConfig {
            knowledge_domains: vec!["a".to_string(), "b".to_string()],
            ..PersonaConfig::default()
        };
        state.select_persona("p1", &config);
        assert_eq!(state.selected_persona.as_deref(), Some("p1"));
        assert!(state.selected_version.is_none());
        assert!(state.note_input.is_empty());
        assert_eq!(state.domains_input, "a, b");
    }

    #[test]
    fn test_process_saved_event_selects_new_version() {
        let mut state = UiState::new();
        state.selected_persona = Some("p1".to_string());
        let refresh = state.process_events(vec![WorkbenchEvent::VersionSaved {
            persona_id: "p1".to_string(),
            timestamp: 42,
            notes: Some("v1".to_string()),
        }]);
        assert!(refresh);
        assert_eq!(state.selected_version, Some(42));
        assert_eq!(state.status_text, "Saved version \"v1\"");
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].level, NoticeLevel::Success);
    }

    #[test]
    fn test_note_cleared_only_by_successful_save() {
        let mut state = UiState::new();
        state.selected_persona = Some("p1".to_string());
        state.note_input = "tuned tone".to_string();

        state.process_events(vec![WorkbenchEvent::Error { message: "quota".to_string() }]);
        assert_eq!(state.note_input, "tuned tone");

        state.process_events(vec![WorkbenchEvent::VersionSaved {
            persona_id: "p2".to_string(),
            timestamp: 7,
            notes: None,
        }]);
        assert_eq!(state.note_input, "tuned tone");

        state.process_events(vec![WorkbenchEvent::VersionSaved {
            persona_id: "p1".to_string(),
            timestamp: 8,
            notes: Some("tuned tone".to_string()),
        }]);
        assert!(state.note_input.is_empty());
    }

    #[test]
    fn test_process_event_for_other_persona() {
        let mut state = UiState::new();
        state.selected_persona = Some("p1".to_string());
        let refresh = state.process_events(vec![WorkbenchEvent::VersionDeleted {
            persona_id: "p2".to_string(),
            timestamp: 1,
        }]);
        assert!(!refresh);
        assert_eq!(state.notifications.len(), 1);
    }

    #[test]
    fn test_process_corrupt_and_error_events() {
        let mut state = UiState::new();
        state.selected_persona = Some("p1".to_string());
        let refresh = state.process_events(vec![
            WorkbenchEvent::HistoryCorrupt {
                persona_id: "p1".to_string(),
                message: "expected value".to_string(),
            },
            WorkbenchEvent::Error { message: "quota".to_string() },
        ]);
        assert!(refresh);
        assert_eq!(state.notifications.len(), 2);
        assert!(state.notifications.iter().all(|n| n.level == NoticeLevel::Error));
        assert_eq!(state.status_text, "Error: quota");
    }

    #[test]
    fn test_notifications_are_capped() {
        let mut state = UiState::new();
        for i in 0..8 {
            state.notify(NoticeLevel::Info, format!("n{}", i));
        }
        assert_eq!(state.notifications.len(), 5);
        assert_eq!(state.notifications[0].message, "n3");
        state.dismiss_notifications();
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_notify_error() {
        let mut state = UiState::new();
        state.notify_error(&PersonaError::UnknownPersona("p".to_string()));
        assert_eq!(state.notifications[0].level, NoticeLevel::Error);
        assert!(state.status_text.starts_with("Error: "));
    }

    // ─── Post-delete selection ───────────────────────────────

    #[test]
    fn test_next_selection_prefers_older_neighbour() {
        let versions = history();
        assert_eq!(next_selection(&versions, 30), Some(20));
        assert_eq!(next_selection(&versions, 20), Some(10));
    }

    #[test]
    fn test_next_selection_oldest_falls_back_to_newer() {
        let versions = history();
        assert_eq!(next_selection(&versions, 10), Some(20));
    }

    #[test]
    fn test_next_selection_single_or_missing() {
        let versions = vec![version(1, 50)];
        assert_eq!(next_selection(&versions, 1), None);
        assert_eq!(next_selection(&history(), 99), None);
    }

    #[test]
    fn test_select_after_delete_only_moves_deleted_selection() {
        let versions = history();
        let mut state = UiState::new();
        state.selected_version = Some(10);
        state.select_after_delete(&versions, 30);
        assert_eq!(state.selected_version, Some(10));

        state.select_after_delete(&versions, 10);
        assert_eq!(state.selected_version, Some(20));
    }

    // ─── History diff ────────────────────────────────────────

    fn changes(diff: SelectionDiff) -> Vec<persona_types::version::FieldDiff> {
        match diff {
            SelectionDiff::Changes(diffs) => diffs,
            other => panic!("expected changes, got {:?}", other),
        }
    }

    #[test]
    fn test_diff_for_selection_against_previous() {
        let versions = history();
        let live = PersonaConfig::default();
        let diffs = changes(diff_for_selection(&versions, Some(30), CompareTarget::Previous, &live));
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].field, PersonaField::Verbosity);
        assert_eq!(diffs[0].before, FieldValue::Number(60));
        assert_eq!(diffs[0].after, FieldValue::Number(80));
    }

    #[test]
    fn test_diff_for_selection_oldest_is_first_version() {
        let versions = vec![
            version(20, 60),
            PersonaVersion::new(10, PersonaConfig::named("Ada"), None),
        ];
        let live = PersonaConfig::default();
        assert_eq!(
            diff_for_selection(&versions, Some(10), CompareTarget::Previous, &live),
            SelectionDiff::FirstVersion
        );
    }

    #[test]
    fn test_diff_for_selection_against_live() {
        let versions = history();
        let live = PersonaConfig { verbosity: 10, ..PersonaConfig::default() };
        let diffs = changes(diff_for_selection(&versions, Some(20), CompareTarget::Live, &live));
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].before, FieldValue::Number(60));
        assert_eq!(diffs[0].after, FieldValue::Number(10));
    }

    #[test]
    fn test_diff_for_selection_oldest_against_live_still_diffs() {
        let versions = history();
        let live = PersonaConfig { verbosity: 90, ..PersonaConfig::default() };
        let diffs = changes(diff_for_selection(&versions, Some(10), CompareTarget::Live, &live));
        assert_eq!(diffs.len(), 1);
    }

    #[test]
    fn test_diff_for_selection_stale_or_none() {
        let versions = history();
        let live = PersonaConfig::default();
        assert_eq!(
            diff_for_selection(&versions, None, CompareTarget::Live, &live),
            SelectionDiff::Missing
        );
        assert_eq!(
            diff_for_selection(&versions, Some(99), CompareTarget::Live, &live),
            SelectionDiff::Missing
        );
    }

    // ─── Editor helpers ──────────────────────────────────────

    #[test]
    fn test_parse_domains() {
        assert_eq!(parse_domains("rust, go ,  ,sql"), vec!["rust", "go", "sql"]);
        assert!(parse_domains("").is_empty());
        assert!(parse_domains(" , ").is_empty());
    }

    // ─── Shortcut Tests ──────────────────────────────────────

    #[test]
    fn test_default_shortcuts() {
        let map = ShortcutMap::default();
        assert_eq!(map.bindings().len(), 4);
        assert_eq!(
            map.action_for(Key::S, Modifiers::CTRL),
            Some(ShortcutAction::SaveVersion)
        );
        assert_eq!(
            map.action_for(Key::S, Modifiers::MAC_CMD),
            Some(ShortcutAction::SaveVersion)
        );
        assert_eq!(
            map.action_for(Key::H, Modifiers::CTRL | Modifiers::SHIFT),
            Some(ShortcutAction::ToggleHistory)
        );
        assert_eq!(
            map.action_for(Key::Escape, Modifiers::NONE),
            Some(ShortcutAction::DismissNotifications)
        );
    }

    #[test]
    fn test_shortcut_requires_exact_modifiers() {
        let map = ShortcutMap::default();
        assert_eq!(map.action_for(Key::S, Modifiers::NONE), None);
        assert_eq!(map.action_for(Key::S, Modifiers::CTRL | Modifiers::SHIFT), None);
        assert_eq!(map.action_for(Key::H, Modifiers::CTRL), None);
    }

    #[test]
    fn test_shortcut_rebind_and_unbind() {
        let mut map = ShortcutMap::default();
        map.bind(KeyChord::command(Key::S), ShortcutAction::ToggleSettings);
        assert_eq!(map.bindings().len(), 4);
        assert_eq!(
            map.action_for(Key::S, Modifiers::CTRL),
            Some(ShortcutAction::ToggleSettings)
        );

        map.unbind(ShortcutAction::ToggleSettings);
        assert_eq!(map.action_for(Key::S, Modifiers::CTRL), None);
        assert!(map.chord_for(ShortcutAction::ToggleSettings).is_none());
    }

    #[test]
    fn test_shortcut_describe() {
        let map = ShortcutMap::default();
        let chord = map.chord_for(ShortcutAction::ToggleHistory).unwrap();
        assert_eq!(chord.describe(), "Ctrl+Shift+H");
        assert_eq!(KeyChord::new(Key::Escape).describe(), "Escape");
    }

    #[test]
    fn test_actions_for_events() {
        let map = ShortcutMap::default();
        let events = vec![
            egui::Event::Key {
                key: Key::S,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::CTRL,
            },
            egui::Event::Key {
                key: Key::S,
                physical_key: None,
                pressed: false,
                repeat: false,
                modifiers: Modifiers::CTRL,
            },
            egui::Event::Key {
                key: Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: true,
                modifiers: Modifiers::NONE,
            },
            egui::Event::Text("s".to_string()),
        ];
        assert_eq!(map.actions_for_events(&events), vec![ShortcutAction::SaveVersion]);
    }

    // ─── Theme & settings ────────────────────────────────────

    #[test]
    fn test_palettes_differ() {
        assert_eq!(theme::palette(ThemeMode::Dark), theme::DARK);
        assert_eq!(theme::palette(ThemeMode::Light), theme::LIGHT);
        assert_ne!(theme::DARK.bg_primary, theme::LIGHT.bg_primary);
    }

    #[test]
    fn test_storage_descriptions() {
        for backend in StorageBackendType::all() {
            assert!(!storage_description(backend).is_empty());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::persona::*;
    use crate::schema::*;
    use crate::version::*;
    use crate::event::*;
    use crate::config::*;
    use crate::error::*;

    // ─── PersonaConfig Tests ─────────────────────────────────

    #[test]
    fn test_persona_default() {
        let p = PersonaConfig::default();
        assert_eq!(p.name, "New Persona");
        assert_eq!(p.verbosity, 50);
        assert!(p.knowledge_domains.is_empty());
        assert!(!p.use_emojis);
        assert!(p.use_code_examples);
    }

    #[test]
    fn test_persona_named() {
        let p = PersonaConfig::named("Reviewer");
        assert_eq!(p.name, "Reviewer");
        assert_eq!(p.tone, "professional");
    }

    #[test]
    fn test_persona_serializes_camel_case() {
        let mut p = PersonaConfig::named("Ada");
        p.knowledge_domains = vec!["rust".to_string()];
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains(r#""knowledgeDomains":["rust"]"#));
        assert!(json.contains(r#""useCodeExamples":true"#));
        assert!(json.contains(r#""customInstructions":"""#));
        assert!(!json.contains("knowledge_domains"));
    }

    #[test]
    fn test_persona_deserializes_stored_record() {
        let json = r#"{
            "name": "Helper",
            "description": "Answers questions",
            "tone": "friendly",
            "knowledgeDomains": ["cooking", "travel"],
            "responseStyle": "detailed",
            "verbosity": 70,
            "creativity": 30,
            "formality": 10,
            "useEmojis": true,
            "useCodeExamples": false,
            "customInstructions": "Be brief"
        }"#;
        let p: PersonaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Helper");
        assert_eq!(p.knowledge_domains, vec!["cooking", "travel"]);
        assert_eq!(p.verbosity, 70);
        assert!(p.use_emojis);
    }

    #[test]
    fn test_persona_missing_field_is_error() {
        let result: Result<PersonaConfig, _> = serde_json::from_str(r#"{"name":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_persona_id_unique() {
        let a = new_persona_id();
        let b = new_persona_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn test_tone_and_style_lists() {
        assert!(TONES.contains(&"professional"));
        assert!(RESPONSE_STYLES.contains(&"concise"));
    }

    // ─── Schema Tests ────────────────────────────────────────

    #[test]
    fn test_schema_covers_every_serialized_key() {
        let value = serde_json::to_value(PersonaConfig::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), PersonaField::ALL.len());
        for field in PersonaField::ALL {
            assert!(obj.contains_key(field.name()), "missing {}", field.name());
        }
    }

    #[test]
    fn test_value_of_matches_serialized_field() {
        let mut p = PersonaConfig::named("Ada");
        p.knowledge_domains = vec!["a".to_string(), "b".to_string()];
        p.use_emojis = true;
        let value = serde_json::to_value(&p).unwrap();
        for field in PersonaField::ALL {
            let lifted = serde_json::to_value(p.value_of(field)).unwrap();
            assert_eq!(lifted, value[field.name()], "field {}", field);
        }
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(PersonaField::Name.kind(), FieldKind::Text);
        assert_eq!(PersonaField::KnowledgeDomains.kind(), FieldKind::List);
        assert_eq!(PersonaField::Verbosity.kind(), FieldKind::Number);
        assert_eq!(PersonaField::UseEmojis.kind(), FieldKind::Flag);

        let p = PersonaConfig::default();
        for field in PersonaField::ALL {
            assert_eq!(p.value_of(field).kind(), field.kind());
        }
    }

    #[test]
    fn test_field_from_name() {
        assert_eq!(
            PersonaField::from_name("knowledgeDomains"),
            Some(PersonaField::KnowledgeDomains)
        );
        assert_eq!(PersonaField::from_name("unknown"), None);
    }

    #[test]
    fn test_field_serializes_as_name() {
        let json = serde_json::to_string(&PersonaField::UseCodeExamples).unwrap();
        assert_eq!(json, r#""useCodeExamples""#);
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Flag(true).display(), "Yes");
        assert_eq!(FieldValue::Flag(false).display(), "No");
        assert_eq!(FieldValue::Number(42).display(), "42");
        assert_eq!(FieldValue::Text("hi".to_string()).display(), "hi");
        assert_eq!(
            FieldValue::List(vec!["x".to_string(), "y".to_string()]).display(),
            "x, y"
        );
        assert_eq!(FieldValue::List(vec![]).display(), "");
    }

    #[test]
    fn test_field_value_list_order_matters() {
        let a = FieldValue::List(vec!["x".to_string(), "y".to_string()]);
        let b = FieldValue::List(vec!["y".to_string(), "x".to_string()]);
        assert_ne!(a, b);
    }

    // ─── Version Tests ───────────────────────────────────────

    #[test]
    fn test_version_without_notes_omits_field() {
        let v = PersonaVersion::new(1_700_000_000_000, PersonaConfig::default(), None);
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains(r#""timestamp":1700000000000"#));
        assert!(!json.contains("notes"));
    }

    #[test]
    fn test_version_missing_notes_deserializes() {
        let data = serde_json::to_string(&PersonaConfig::default()).unwrap();
        let json = format!(r#"{{"timestamp":5,"data":{}}}"#, data);
        let v: PersonaVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(v.timestamp, 5);
        assert!(v.notes.is_none());
        assert_eq!(v.notes_or_default(), "(no notes)");
    }

    #[test]
    fn test_version_saved_at_label_format() {
        let v = PersonaVersion::new(1_700_000_000_000, PersonaConfig::default(), None);
        let label = v.saved_at_label();
        assert_eq!(label.len(), 19);
        assert_eq!(&label[4..5], "-");
        assert_eq!(&label[13..14], ":");
    }

    #[test]
    fn test_field_diff_serialization() {
        let d = FieldDiff {
            field: PersonaField::Verbosity,
            before: FieldValue::Number(50),
            after: FieldValue::Number(80),
        };
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"field":"verbosity","before":50,"after":80}"#);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_event_persona_id() {
        let e = WorkbenchEvent::VersionDeleted {
            persona_id: "p1".to_string(),
            timestamp: 3,
        };
        assert_eq!(e.persona_id(), Some("p1"));
        let e = WorkbenchEvent::Error { message: "boom".to_string() };
        assert_eq!(e.persona_id(), None);
    }

    #[test]
    fn test_event_serialization() {
        let e = WorkbenchEvent::VersionSaved {
            persona_id: "p1".to_string(),
            timestamp: 10,
            notes: Some("v1".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("VersionSaved"));
        assert!(json.contains("v1"));
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_default() {
        let config = WorkbenchConfig::default();
        assert_eq!(config.storage.backend, StorageBackendType::Auto);
        assert_eq!(config.storage.key_prefix, DEFAULT_KEY_PREFIX);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(config.shortcuts_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_empty_prefix_rejected() {
        let mut config = WorkbenchConfig::default();
        config.storage.key_prefix = "  ".to_string();
        assert!(matches!(config.validate(), Err(PersonaError::Config(_))));
    }

    #[test]
    fn test_config_prefix_covering_config_key_rejected() {
        let mut config = WorkbenchConfig::default();
        for prefix in ["workbench:", "work", "workbench:config"] {
            config.storage.key_prefix = prefix.to_string();
            assert!(matches!(config.validate(), Err(PersonaError::Config(_))), "{}", prefix);
        }

        config.storage.key_prefix = "workbench:history:".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_fills_missing_fields() {
        let config: WorkbenchConfig =
            serde_json::from_str(r#"{"storage":{"backend":"Memory"}}"#).unwrap();
        assert_eq!(config.storage.backend, StorageBackendType::Memory);
        assert_eq!(config.storage.key_prefix, DEFAULT_KEY_PREFIX);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(config.shortcuts_enabled);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_storage_backend_labels() {
        assert_eq!(StorageBackendType::all().len(), 3);
        assert_eq!(StorageBackendType::LocalStorage.label(), "Local Storage");
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let e = PersonaError::NotFound {
            persona_id: "p1".to_string(),
            timestamp: 42,
        };
        assert_eq!(e.to_string(), "Version 42 not found for persona p1");

        let e = PersonaError::UnknownPersona("p2".to_string());
        assert_eq!(e.to_string(), "No live configuration for persona p2");

        let e = PersonaError::TimestampExhausted(7);
        assert_eq!(e.to_string(), "No timestamp after 7 is available for a new version");
    }

    #[test]
    fn test_error_from_serde() {
        let err: PersonaError = serde_json::from_str::<PersonaConfig>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, PersonaError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}

//! Static field schema for `PersonaConfig`.
//!
//! The diff engine and the editor walk `PersonaField::ALL` instead of
//! reflecting over the serialized object, so adding a field to the model
//! means adding it here too.

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::persona::PersonaConfig;

/// What kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Flag,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonaField {
    Name,
    Description,
    Tone,
    KnowledgeDomains,
    ResponseStyle,
    Verbosity,
    Creativity,
    Formality,
    UseEmojis,
    UseCodeExamples,
    CustomInstructions,
}

impl PersonaField {
    /// Every field, in the order diffs are reported.
    pub const ALL: [PersonaField; 11] = [
        PersonaField::Name,
        PersonaField::Description,
        PersonaField::Tone,
        PersonaField::KnowledgeDomains,
        PersonaField::ResponseStyle,
        PersonaField::Verbosity,
        PersonaField::Creativity,
        PersonaField::Formality,
        PersonaField::UseEmojis,
        PersonaField::UseCodeExamples,
        PersonaField::CustomInstructions,
    ];

    /// Key used in the stored JSON record
    pub fn name(&self) -> &'static str {
        match self {
            PersonaField::Name => "name",
            PersonaField::Description => "description",
            PersonaField::Tone => "tone",
            PersonaField::KnowledgeDomains => "knowledgeDomains",
            PersonaField::ResponseStyle => "responseStyle",
            PersonaField::Verbosity => "verbosity",
            PersonaField::Creativity => "creativity",
            PersonaField::Formality => "formality",
            PersonaField::UseEmojis => "useEmojis",
            PersonaField::UseCodeExamples => "useCodeExamples",
            PersonaField::CustomInstructions => "customInstructions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PersonaField::Name => "Name",
            PersonaField::Description => "Description",
            PersonaField::Tone => "Tone",
            PersonaField::KnowledgeDomains => "Knowledge Domains",
            PersonaField::ResponseStyle => "Response Style",
            PersonaField::Verbosity => "Verbosity",
            PersonaField::Creativity => "Creativity",
            PersonaField::Formality => "Formality",
            PersonaField::UseEmojis => "Use Emojis",
            PersonaField::UseCodeExamples => "Use Code Examples",
            PersonaField::CustomInstructions => "Custom Instructions",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            PersonaField::Name
            | PersonaField::Description
            | PersonaField::Tone
            | PersonaField::ResponseStyle
            | PersonaField::CustomInstructions => FieldKind::Text,
            PersonaField::KnowledgeDomains => FieldKind::List,
            PersonaField::Verbosity | PersonaField::Creativity | PersonaField::Formality => {
                FieldKind::Number
            }
            PersonaField::UseEmojis | PersonaField::UseCodeExamples => FieldKind::Flag,
        }
    }

    pub fn from_name(name: &str) -> Option<PersonaField> {
        PersonaField::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl fmt::Display for PersonaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single field's value, lifted out of `PersonaConfig`.
///
/// Serializes to the same JSON as the field inside the stored record,
/// so equality here matches equality of the serialized forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(i64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::List(_) => FieldKind::List,
        }
    }

    /// Human-readable rendering for the history view
    pub fn display(&self) -> String {
        match self {
            FieldValue::Flag(true) => "Yes".to_string(),
            FieldValue::Flag(false) => "No".to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl PersonaConfig {
    pub fn value_of(&self, field: PersonaField) -> FieldValue {
        match field {
            PersonaField::Name => FieldValue::Text(self.name.clone()),
            PersonaField::Description => FieldValue::Text(self.description.clone()),
            PersonaField::Tone => FieldValue::Text(self.tone.clone()),
            PersonaField::KnowledgeDomains => FieldValue::List(self.knowledge_domains.clone()),
            PersonaField::ResponseStyle => FieldValue::Text(self.response_style.clone()),
            PersonaField::Verbosity => FieldValue::Number(self.verbosity),
            PersonaField::Creativity => FieldValue::Number(self.creativity),
            PersonaField::Formality => FieldValue::Number(self.formality),
            PersonaField::UseEmojis => FieldValue::Flag(self.use_emojis),
            PersonaField::UseCodeExamples => FieldValue::Flag(self.use_code_examples),
            PersonaField::CustomInstructions => FieldValue::Text(self.custom_instructions.clone()),
        }
    }
}

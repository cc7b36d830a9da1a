use serde::{Deserialize, Serialize};

/// Tones offered by the editor. The field itself is free text.
pub const TONES: &[&str] = &[
    "professional",
    "friendly",
    "casual",
    "formal",
    "enthusiastic",
    "empathetic",
];

/// Response styles offered by the editor. The field itself is free text.
pub const RESPONSE_STYLES: &[&str] = &[
    "concise",
    "detailed",
    "conversational",
    "structured",
    "socratic",
];

/// Assistant behaviour settings for one persona.
///
/// The version store treats this as an opaque value; nothing here is
/// validated on save or restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaConfig {
    pub name: String,
    pub description: String,
    pub tone: String,
    pub knowledge_domains: Vec<String>,
    pub response_style: String,
    /// 0–100
    pub verbosity: i64,
    /// 0–100
    pub creativity: i64,
    /// 0–100
    pub formality: i64,
    pub use_emojis: bool,
    pub use_code_examples: bool,
    pub custom_instructions: String,
}

impl PersonaConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: "New Persona".to_string(),
            description: String::new(),
            tone: "professional".to_string(),
            knowledge_domains: Vec::new(),
            response_style: "concise".to_string(),
            verbosity: 50,
            creativity: 50,
            formality: 50,
            use_emojis: false,
            use_code_examples: true,
            custom_instructions: String::new(),
        }
    }
}

/// Fresh identifier for a persona created in the workbench.
pub fn new_persona_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

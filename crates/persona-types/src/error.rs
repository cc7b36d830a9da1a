use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonaError {
    #[error("Version {timestamp} not found for persona {persona_id}")]
    NotFound { persona_id: String, timestamp: i64 },

    #[error("No live configuration for persona {0}")]
    UnknownPersona(String),

    #[error("No timestamp after {0} is available for a new version")]
    TimestampExhausted(i64),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for PersonaError {
    fn from(e: serde_json::Error) -> Self {
        PersonaError::Serialization(e.to_string())
    }
}

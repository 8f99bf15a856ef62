use thiserror::Error;

/// Errors produced while loading snapshots or schemas.
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("snapshot must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid snapshot JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("schema entry {index} has an empty key")]
    EmptyKey { index: usize },

    #[error("duplicate schema key: {0}")]
    DuplicateKey(String),

    #[error("invalid schema: {0}")]
    InvalidSchema(#[from] toml::de::Error),

    #[error("schema serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),
}

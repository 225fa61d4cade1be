// File: src/error.rs
use thiserror::Error;

/// Errors raised outside the pure core: file access, (de)serialization,
/// configuration, and strict transcription parsing.
#[derive(Debug, Error)]
pub enum PhoneticError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dictionary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("failed to persist file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// A transcription without its `/.../` or `[...]` delimiter pair.
    #[error("transcription {0:?} is missing its delimiter pair")]
    MissingDelimiter(String),

    #[error("transcription is empty between its delimiters")]
    EmptyTranscription,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("subset directory {0:?} does not exist")]
    UnknownSubset(String),
}

pub type Result<T> = std::result::Result<T, PhoneticError>;

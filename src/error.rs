use thiserror::Error;

use crate::engine::GenerationError;

#[derive(Debug, Error)]
pub enum SantaError {
    #[error("{field} cannot be empty")]
    BlankField { field: String },

    #[error("{field} must be at least {min} characters long")]
    TooShort { field: String, min: usize },

    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} contains invalid characters")]
    InvalidCharacters { field: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Group \"{group}\" {reason}")]
    InvalidGroup { group: String, reason: String },

    #[error("Name does not match. Please try again.")]
    NameMismatch,

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: usize, max: usize },

    #[error("No current list")]
    NoCurrentList,

    #[error("This historical list contains invalid assignments")]
    InvalidHistoryEntry,

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SantaResult<T> = Result<T, SantaError>;

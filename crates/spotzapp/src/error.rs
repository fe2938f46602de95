use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SpotzError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("A place named '{0}' already exists")]
    DuplicateName(String),

    #[error("Place not found: {0}")]
    NotFound(Uuid),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No places match the current filters")]
    EmptyPool,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SpotzError>;

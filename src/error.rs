use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

pub type Result<T> = std::result::Result<T, PetError>;

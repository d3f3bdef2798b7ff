use thiserror::Error;

#[derive(Error, Debug)]
pub enum GarbError {
    /// User input missing or invalid. Shown to the user verbatim.
    #[error("{0}")]
    Validation(String),

    /// A collaborator capability (file access, dialogs) failed.
    #[error("{0}")]
    Capability(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, GarbError>;

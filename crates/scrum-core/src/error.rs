use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrumError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScrumError {
    /// Transient failures are worth retrying; everything else is final.
    pub fn is_transient(&self) -> bool {
        matches!(self, ScrumError::Connection(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("note creation failed: {0}")]
    CreationFailed(String),
    #[error("note not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl NoteError {
    /// Returns `true` when the error means no note matched the requested identifier.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NoteError::NotFound(_))
    }
}

pub type NoteResult<T> = std::result::Result<T, NoteError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Remote write failed: {0}")]
    RemoteWrite(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// The caller may retry the action that produced this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::RemoteWrite(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

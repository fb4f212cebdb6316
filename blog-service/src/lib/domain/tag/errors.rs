use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::errors::ErrorKind;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagNameError {
    #[error("Tag name must not be blank")]
    Blank,
}

#[derive(Debug, Clone, Error)]
pub enum TagError {
    #[error("Invalid tag: {0}")]
    InvalidName(#[from] TagNameError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError for TagError {
    fn kind(&self) -> ErrorKind {
        match self {
            TagError::InvalidName(_) => ErrorKind::Validation,
            TagError::DatabaseError(_) => ErrorKind::Internal,
        }
    }
}

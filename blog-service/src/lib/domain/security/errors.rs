use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::errors::ErrorKind;
use crate::domain::user::errors::UserError;
use crate::domain::user::errors::UserIdError;

/// Reasons a token could not be turned into a principal.
///
/// The request authenticator absorbs all of these; they only surface in logs.
#[derive(Debug, Clone, Error)]
pub enum SecurityError {
    #[error("Token rejected: {0}")]
    Token(#[from] auth::TokenError),

    #[error("Token subject is not a user id: {0}")]
    InvalidSubject(#[from] UserIdError),

    #[error("Principal not found")]
    PrincipalNotFound,

    #[error("Principal lookup failed: {0}")]
    Lookup(#[from] UserError),
}

impl DomainError for SecurityError {
    fn kind(&self) -> ErrorKind {
        match self {
            SecurityError::Lookup(_) => ErrorKind::Internal,
            _ => ErrorKind::Unauthenticated,
        }
    }
}

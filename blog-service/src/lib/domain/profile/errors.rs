use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::errors::ErrorKind;
use crate::domain::user::errors::UserError;

#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Users cannot follow themselves")]
    CannotFollowSelf,

    #[error("Users cannot unfollow themselves")]
    CannotUnfollowSelf,

    #[error(transparent)]
    User(#[from] UserError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError for ProfileError {
    fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::NotFound => ErrorKind::NotFound,
            ProfileError::CannotFollowSelf | ProfileError::CannotUnfollowSelf => {
                ErrorKind::Forbidden
            }
            ProfileError::User(err) => err.kind(),
            ProfileError::DatabaseError(_) => ErrorKind::Internal,
        }
    }
}

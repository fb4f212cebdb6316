use thiserror::Error;

use crate::domain::article::errors::ArticleError;
use crate::domain::errors::DomainError;
use crate::domain::errors::ErrorKind;
use crate::domain::profile::errors::ProfileError;
use crate::domain::user::errors::UserError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error)]
pub enum CommentError {
    #[error("Comment body must not be blank")]
    BlankBody,

    #[error("Article not found")]
    ArticleNotFound,

    #[error("Comment not found")]
    NotFound,

    #[error("Only comment author can delete the comment")]
    NotAuthor,

    #[error(transparent)]
    Article(#[from] ArticleError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError for CommentError {
    fn kind(&self) -> ErrorKind {
        match self {
            CommentError::BlankBody => ErrorKind::Validation,
            CommentError::ArticleNotFound | CommentError::NotFound => ErrorKind::NotFound,
            CommentError::NotAuthor => ErrorKind::Forbidden,
            CommentError::Article(err) => err.kind(),
            CommentError::User(err) => err.kind(),
            CommentError::Profile(err) => err.kind(),
            CommentError::DatabaseError(_) => ErrorKind::Internal,
        }
    }
}

use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::errors::ErrorKind;
use crate::domain::profile::errors::ProfileError;
use crate::domain::tag::errors::TagError;
use crate::domain::user::errors::UserError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("Title must contain at least one letter or digit")]
    Empty,
}

#[derive(Debug, Clone, Error)]
pub enum ArticleError {
    #[error("{0} must not be blank")]
    BlankField(&'static str),

    #[error("Invalid title: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("At least one field must be provided for update")]
    EmptyUpdate,

    #[error("Article not found")]
    NotFound,

    #[error("You can only update your own articles")]
    NotAuthorOfUpdate,

    #[error("You can only delete your own articles")]
    NotAuthorOfDelete,

    #[error("Article is already favorited")]
    AlreadyFavorited,

    #[error("Article is not favorited yet")]
    NotFavorited,

    #[error("An article with slug {0} already exists")]
    SlugAlreadyExists(String),

    #[error(transparent)]
    Tag(#[from] TagError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl DomainError for ArticleError {
    fn kind(&self) -> ErrorKind {
        match self {
            ArticleError::BlankField(_)
            | ArticleError::InvalidSlug(_)
            | ArticleError::EmptyUpdate => ErrorKind::Validation,
            ArticleError::NotFound => ErrorKind::NotFound,
            ArticleError::NotAuthorOfUpdate | ArticleError::NotAuthorOfDelete => {
                ErrorKind::Forbidden
            }
            ArticleError::AlreadyFavorited
            | ArticleError::NotFavorited
            | ArticleError::SlugAlreadyExists(_) => ErrorKind::Conflict,
            ArticleError::Tag(err) => err.kind(),
            ArticleError::User(err) => err.kind(),
            ArticleError::Profile(err) => err.kind(),
            ArticleError::DatabaseError(_) | ArticleError::Unknown(_) => ErrorKind::Internal,
        }
    }
}

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::article::models::ArticleId;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::errors::CommentIdError;
use crate::domain::profile::models::Profile;
use crate::domain::user::models::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CommentIdError> {
        Uuid::parse_str(s)
            .map(CommentId)
            .map_err(|e| CommentIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A comment on one article, owned by its author.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment: Comment,
    pub author: Profile,
}

#[derive(Debug)]
pub struct AddCommentCommand {
    pub body: String,
}

impl AddCommentCommand {
    /// # Errors
    /// * `BlankBody` - Body is empty or whitespace only
    pub fn new(body: String) -> Result<Self, CommentError> {
        if body.trim().is_empty() {
            return Err(CommentError::BlankBody);
        }
        Ok(Self { body })
    }
}

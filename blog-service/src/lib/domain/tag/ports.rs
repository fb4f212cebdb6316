use async_trait::async_trait;

use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::Tag;
use crate::domain::tag::models::TagName;

#[async_trait]
pub trait TagServicePort: Send + Sync + 'static {
    /// All known tag names, alphabetically.
    async fn list_tags(&self) -> Result<Vec<TagName>, TagError>;
}

/// Read side of the tag store.
///
/// Tags are written only as part of article creation, inside that
/// article's transaction.
#[async_trait]
pub trait TagRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Tag>, TagError>;
}

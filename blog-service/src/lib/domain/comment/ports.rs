use async_trait::async_trait;

use crate::domain::article::models::ArticleId;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::AddCommentCommand;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CommentView;
use crate::domain::security::models::Principal;

#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `ArticleNotFound` - No article with this slug
    async fn add(
        &self,
        principal: &Principal,
        slug: &str,
        command: AddCommentCommand,
    ) -> Result<CommentView, CommentError>;

    /// Comments of an article, oldest first.
    ///
    /// # Errors
    /// * `ArticleNotFound` - No article with this slug
    async fn list(
        &self,
        slug: &str,
        viewer: Option<Principal>,
    ) -> Result<Vec<CommentView>, CommentError>;

    /// # Errors
    /// * `ArticleNotFound` - No article with this slug
    /// * `NotFound` - No such comment on this article
    /// * `NotAuthor` - Principal did not write the comment
    async fn delete(
        &self,
        principal: &Principal,
        slug: &str,
        comment_id: &CommentId,
    ) -> Result<(), CommentError>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;

    async fn list_by_article(&self, article: &ArticleId) -> Result<Vec<Comment>, CommentError>;

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;
}

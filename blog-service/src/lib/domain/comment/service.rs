use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::article::models::Article;
use crate::domain::article::ports::ArticleRepository;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::AddCommentCommand;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CommentView;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::profile::ports::FollowRepository;
use crate::domain::profile::service::author_profiles;
use crate::domain::security::guards::can_delete_comment;
use crate::domain::security::models::Principal;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

pub struct CommentService<CR, AR, UR, FR>
where
    CR: CommentRepository,
    AR: ArticleRepository,
    UR: UserRepository,
    FR: FollowRepository,
{
    comments: Arc<CR>,
    articles: Arc<AR>,
    users: Arc<UR>,
    follows: Arc<FR>,
}

impl<CR, AR, UR, FR> CommentService<CR, AR, UR, FR>
where
    CR: CommentRepository,
    AR: ArticleRepository,
    UR: UserRepository,
    FR: FollowRepository,
{
    pub fn new(comments: Arc<CR>, articles: Arc<AR>, users: Arc<UR>, follows: Arc<FR>) -> Self {
        Self {
            comments,
            articles,
            users,
            follows,
        }
    }

    async fn article(&self, slug: &str) -> Result<Article, CommentError> {
        self.articles
            .find_by_slug(slug)
            .await?
            .ok_or(CommentError::ArticleNotFound)
    }

    async fn render(
        &self,
        comments: Vec<Comment>,
        viewer: Option<&Principal>,
    ) -> Result<Vec<CommentView>, CommentError> {
        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: Vec<UserId> = comments.iter().map(|c| c.author_id).collect();
        let authors = author_profiles(&*self.users, &*self.follows, viewer, &author_ids).await?;

        // Comments whose author vanished are dropped from the listing.
        Ok(comments
            .into_iter()
            .filter_map(|comment| {
                authors
                    .get(&comment.author_id)
                    .cloned()
                    .map(|author| CommentView { comment, author })
            })
            .collect())
    }
}

#[async_trait]
impl<CR, AR, UR, FR> CommentServicePort for CommentService<CR, AR, UR, FR>
where
    CR: CommentRepository,
    AR: ArticleRepository,
    UR: UserRepository,
    FR: FollowRepository,
{
    async fn add(
        &self,
        principal: &Principal,
        slug: &str,
        command: AddCommentCommand,
    ) -> Result<CommentView, CommentError> {
        let article = self.article(slug).await?;

        let now = Utc::now();
        let comment = Comment {
            id: CommentId::new(),
            article_id: article.id,
            author_id: principal.id,
            body: command.body,
            created_at: now,
            updated_at: now,
        };

        let created = self.comments.create(comment).await?;
        tracing::debug!(comment_id = %created.id, article_id = %article.id, "Comment added");

        self.render(vec![created], Some(principal))
            .await?
            .pop()
            .ok_or(CommentError::NotFound)
    }

    async fn list(
        &self,
        slug: &str,
        viewer: Option<Principal>,
    ) -> Result<Vec<CommentView>, CommentError> {
        let article = self.article(slug).await?;
        let comments = self.comments.list_by_article(&article.id).await?;
        self.render(comments, viewer.as_ref()).await
    }

    async fn delete(
        &self,
        principal: &Principal,
        slug: &str,
        comment_id: &CommentId,
    ) -> Result<(), CommentError> {
        let article = self.article(slug).await?;

        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .filter(|comment| comment.article_id == article.id)
            .ok_or(CommentError::NotFound)?;

        if !can_delete_comment(Some(principal), &comment) {
            return Err(CommentError::NotAuthor);
        }

        self.comments.delete(&comment.id).await
    }
}

use async_trait::async_trait;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::models::Article;
use crate::domain::article::models::ArticleId;
use crate::domain::article::models::ArticlePage;
use crate::domain::article::models::ArticleQuery;
use crate::domain::article::models::ArticleView;
use crate::domain::article::models::CreateArticleCommand;
use crate::domain::article::models::Pagination;
use crate::domain::article::models::UpdateArticleCommand;
use crate::domain::security::models::Principal;
use crate::domain::user::models::UserId;

/// Port for article domain service operations.
///
/// Every returned view is shaped for the given viewer or principal.
#[async_trait]
pub trait ArticleServicePort: Send + Sync + 'static {
    /// Publish a new article authored by the principal.
    ///
    /// # Errors
    /// * `InvalidSlug` - Title has no letter or digit
    /// * `SlugAlreadyExists` - Another article derives the same slug
    async fn create(
        &self,
        principal: &Principal,
        command: CreateArticleCommand,
    ) -> Result<ArticleView, ArticleError>;

    /// # Errors
    /// * `NotFound` - No article with this slug
    async fn get(&self, slug: &str, viewer: Option<Principal>) -> Result<ArticleView, ArticleError>;

    /// Newest first.
    async fn list(
        &self,
        query: ArticleQuery,
        viewer: Option<Principal>,
    ) -> Result<ArticlePage, ArticleError>;

    /// Articles by authors the principal follows, newest first.
    async fn feed(
        &self,
        principal: &Principal,
        page: Pagination,
    ) -> Result<ArticlePage, ArticleError>;

    /// # Errors
    /// * `EmptyUpdate` - No field present in the command
    /// * `NotFound` - No article with this slug
    /// * `NotAuthorOfUpdate` - Principal is not the author
    async fn update(
        &self,
        principal: &Principal,
        slug: &str,
        command: UpdateArticleCommand,
    ) -> Result<ArticleView, ArticleError>;

    /// Delete an article with its comments, favorites and tag links.
    ///
    /// # Errors
    /// * `NotFound` - No article with this slug
    /// * `NotAuthorOfDelete` - Principal is not the author
    async fn delete(&self, principal: &Principal, slug: &str) -> Result<(), ArticleError>;

    /// # Errors
    /// * `NotFound` - No article with this slug
    /// * `AlreadyFavorited` - Principal already favorited it
    async fn favorite(&self, principal: &Principal, slug: &str)
        -> Result<ArticleView, ArticleError>;

    /// # Errors
    /// * `NotFound` - No article with this slug
    /// * `NotFavorited` - Principal had not favorited it
    async fn unfavorite(
        &self,
        principal: &Principal,
        slug: &str,
    ) -> Result<ArticleView, ArticleError>;
}

/// Persistence operations for article aggregate.
#[async_trait]
pub trait ArticleRepository: Send + Sync + 'static {
    /// Store an article with its tags as one unit of work, creating tags
    /// whose name is not yet known.
    ///
    /// # Errors
    /// * `SlugAlreadyExists` - Slug is taken; no tag is created
    async fn create(&self, article: Article) -> Result<Article, ArticleError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, ArticleError>;

    /// The requested page plus the total number of matches.
    async fn list(&self, query: &ArticleQuery) -> Result<(Vec<Article>, i64), ArticleError>;

    async fn feed(
        &self,
        follower: &UserId,
        page: &Pagination,
    ) -> Result<(Vec<Article>, i64), ArticleError>;

    /// Persist title, slug, description and body.
    ///
    /// # Errors
    /// * `NotFound` - Article vanished meanwhile
    /// * `SlugAlreadyExists` - New slug is taken
    async fn update(&self, article: Article) -> Result<Article, ArticleError>;

    async fn delete(&self, id: &ArticleId) -> Result<(), ArticleError>;

    /// Returns `false` when the favorite already existed.
    async fn add_favorite(&self, article: &ArticleId, user: &UserId) -> Result<bool, ArticleError>;

    /// Returns `false` when there was no favorite to remove.
    async fn remove_favorite(
        &self,
        article: &ArticleId,
        user: &UserId,
    ) -> Result<bool, ArticleError>;
}

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::models::Article;
use crate::domain::article::models::ArticleId;
use crate::domain::article::models::ArticlePage;
use crate::domain::article::models::ArticleQuery;
use crate::domain::article::models::ArticleView;
use crate::domain::article::models::CreateArticleCommand;
use crate::domain::article::models::Pagination;
use crate::domain::article::models::Slug;
use crate::domain::article::models::UpdateArticleCommand;
use crate::domain::article::ports::ArticleRepository;
use crate::domain::article::ports::ArticleServicePort;
use crate::domain::profile::models::Profile;
use crate::domain::profile::ports::FollowRepository;
use crate::domain::profile::service::author_profiles;
use crate::domain::security::guards::can_modify_article;
use crate::domain::security::guards::is_favorited_by_principal;
use crate::domain::security::models::Principal;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for article operations.
pub struct ArticleService<AR, UR, FR>
where
    AR: ArticleRepository,
    UR: UserRepository,
    FR: FollowRepository,
{
    articles: Arc<AR>,
    users: Arc<UR>,
    follows: Arc<FR>,
}

impl<AR, UR, FR> ArticleService<AR, UR, FR>
where
    AR: ArticleRepository,
    UR: UserRepository,
    FR: FollowRepository,
{
    pub fn new(articles: Arc<AR>, users: Arc<UR>, follows: Arc<FR>) -> Self {
        Self {
            articles,
            users,
            follows,
        }
    }

    async fn find(&self, slug: &str) -> Result<Article, ArticleError> {
        self.articles
            .find_by_slug(slug)
            .await?
            .ok_or(ArticleError::NotFound)
    }

    async fn render(
        &self,
        article: Article,
        viewer: Option<&Principal>,
    ) -> Result<ArticleView, ArticleError> {
        self.render_many(vec![article], viewer)
            .await?
            .pop()
            .ok_or_else(|| ArticleError::Unknown("article lost while rendering".to_string()))
    }

    async fn render_many(
        &self,
        articles: Vec<Article>,
        viewer: Option<&Principal>,
    ) -> Result<Vec<ArticleView>, ArticleError> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: Vec<UserId> = articles.iter().map(|a| a.author_id).collect();
        let authors: HashMap<UserId, Profile> =
            author_profiles(&*self.users, &*self.follows, viewer, &author_ids).await?;

        articles
            .into_iter()
            .map(|article| {
                let author = authors
                    .get(&article.author_id)
                    .cloned()
                    .ok_or_else(|| {
                        ArticleError::Unknown(format!("author of {} is missing", article.id))
                    })?;

                Ok(ArticleView {
                    favorited: is_favorited_by_principal(viewer, &article),
                    favorites_count: article.favorites_count(),
                    author,
                    article,
                })
            })
            .collect()
    }
}

#[async_trait]
impl<AR, UR, FR> ArticleServicePort for ArticleService<AR, UR, FR>
where
    AR: ArticleRepository,
    UR: UserRepository,
    FR: FollowRepository,
{
    async fn create(
        &self,
        principal: &Principal,
        command: CreateArticleCommand,
    ) -> Result<ArticleView, ArticleError> {
        let slug = Slug::from_title(&command.title)?;

        let now = Utc::now();
        let article = Article {
            id: ArticleId::new(),
            slug,
            title: command.title,
            description: command.description,
            body: command.body,
            tags: command.tags,
            author_id: principal.id,
            favorited_by: Default::default(),
            created_at: now,
            updated_at: now,
        };

        // Unknown tags are created in the same transaction as the article.
        let created = self.articles.create(article).await?;
        tracing::info!(article_id = %created.id, slug = %created.slug, "Article created");

        self.render(created, Some(principal)).await
    }

    async fn get(&self, slug: &str, viewer: Option<Principal>) -> Result<ArticleView, ArticleError> {
        let article = self.find(slug).await?;
        self.render(article, viewer.as_ref()).await
    }

    async fn list(
        &self,
        query: ArticleQuery,
        viewer: Option<Principal>,
    ) -> Result<ArticlePage, ArticleError> {
        let (articles, total) = self.articles.list(&query).await?;
        let articles = self.render_many(articles, viewer.as_ref()).await?;
        Ok(ArticlePage { articles, total })
    }

    async fn feed(
        &self,
        principal: &Principal,
        page: Pagination,
    ) -> Result<ArticlePage, ArticleError> {
        let (articles, total) = self.articles.feed(&principal.id, &page).await?;
        let articles = self.render_many(articles, Some(principal)).await?;
        Ok(ArticlePage { articles, total })
    }

    async fn update(
        &self,
        principal: &Principal,
        slug: &str,
        command: UpdateArticleCommand,
    ) -> Result<ArticleView, ArticleError> {
        if command.is_empty() {
            return Err(ArticleError::EmptyUpdate);
        }

        let mut article = self.find(slug).await?;
        if !can_modify_article(Some(principal), &article) {
            return Err(ArticleError::NotAuthorOfUpdate);
        }

        article.apply(command)?;
        let updated = self.articles.update(article).await?;

        self.render(updated, Some(principal)).await
    }

    async fn delete(&self, principal: &Principal, slug: &str) -> Result<(), ArticleError> {
        let article = self.find(slug).await?;
        if !can_modify_article(Some(principal), &article) {
            return Err(ArticleError::NotAuthorOfDelete);
        }

        self.articles.delete(&article.id).await?;
        tracing::info!(article_id = %article.id, "Article deleted");
        Ok(())
    }

    async fn favorite(
        &self,
        principal: &Principal,
        slug: &str,
    ) -> Result<ArticleView, ArticleError> {
        let mut article = self.find(slug).await?;

        if !self.articles.add_favorite(&article.id, &principal.id).await? {
            return Err(ArticleError::AlreadyFavorited);
        }
        article.favorited_by.insert(principal.id);

        self.render(article, Some(principal)).await
    }

    async fn unfavorite(
        &self,
        principal: &Principal,
        slug: &str,
    ) -> Result<ArticleView, ArticleError> {
        let mut article = self.find(slug).await?;

        if !self
            .articles
            .remove_favorite(&article.id, &principal.id)
            .await?
        {
            return Err(ArticleError::NotFavorited);
        }
        article.favorited_by.remove(&principal.id);

        self.render(article, Some(principal)).await
    }
}

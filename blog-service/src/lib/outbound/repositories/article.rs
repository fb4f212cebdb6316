use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::article::errors::ArticleError;
use crate::domain::article::models::Article;
use crate::domain::article::models::ArticleId;
use crate::domain::article::models::ArticleQuery;
use crate::domain::article::models::Pagination;
use crate::domain::article::models::Slug;
use crate::domain::article::ports::ArticleRepository;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::TagName;
use crate::domain::user::models::UserId;
use crate::outbound::repositories::tag::find_or_insert;

const SELECT_ARTICLE: &str = r#"
    SELECT
        a.id, a.slug, a.title, a.description, a.body, a.author_id,
        a.created_at, a.updated_at,
        ARRAY(
            SELECT t.name FROM article_tags at
            JOIN tags t ON t.id = at.tag_id
            WHERE at.article_id = a.id
            ORDER BY t.name
        ) AS tags,
        ARRAY(
            SELECT af.user_id FROM article_favorites af
            WHERE af.article_id = a.id
        ) AS favorited_by
    FROM articles a
"#;

/// Filters bound as $1 tag, $2 author username, $3 favoriting username.
const LIST_FILTER: &str = r#"
    WHERE ($1::text IS NULL OR EXISTS (
            SELECT 1 FROM article_tags at
            JOIN tags t ON t.id = at.tag_id
            WHERE at.article_id = a.id AND t.name = $1
        ))
      AND ($2::text IS NULL OR EXISTS (
            SELECT 1 FROM users u
            WHERE u.id = a.author_id AND u.username = $2
        ))
      AND ($3::text IS NULL OR EXISTS (
            SELECT 1 FROM article_favorites af
            JOIN users u ON u.id = af.user_id
            WHERE af.article_id = a.id AND u.username = $3
        ))
"#;

const FEED_FILTER: &str = r#"
    WHERE a.author_id IN (SELECT followed_id FROM follows WHERE follower_id = $1)
"#;

#[derive(sqlx::FromRow)]
struct ArticleRow {
    id: Uuid,
    slug: String,
    title: String,
    description: String,
    body: String,
    author_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tags: Vec<String>,
    favorited_by: Vec<Uuid>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = ArticleError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let tags = row
            .tags
            .iter()
            .map(|name| TagName::new(name).map_err(TagError::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Article {
            id: ArticleId(row.id),
            slug: Slug::from_stored(row.slug),
            title: row.title,
            description: row.description,
            body: row.body,
            tags,
            author_id: UserId(row.author_id),
            favorited_by: row.favorited_by.into_iter().map(UserId).collect(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> ArticleError {
    ArticleError::DatabaseError(e.to_string())
}

fn map_write_error(e: sqlx::Error, article: &Article) -> ArticleError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("articles_slug_key") {
            return ArticleError::SlugAlreadyExists(article.slug.as_str().to_string());
        }
    }
    database_error(e)
}

fn into_articles(rows: Vec<ArticleRow>) -> Result<Vec<Article>, ArticleError> {
    rows.into_iter().map(Article::try_from).collect()
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn create(&self, article: Article) -> Result<Article, ArticleError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        sqlx::query(
            r#"
            INSERT INTO articles
                (id, author_id, slug, title, description, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(article.id.0)
        .bind(article.author_id.0)
        .bind(article.slug.as_str())
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.body)
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &article))?;

        if !article.tags.is_empty() {
            let mut tag_ids: Vec<Uuid> = Vec::with_capacity(article.tags.len());
            for name in &article.tags {
                let tag_id = find_or_insert(&mut *tx, name)
                    .await
                    .map_err(database_error)?;
                tag_ids.push(tag_id.0);
            }

            sqlx::query(
                r#"
                INSERT INTO article_tags (article_id, tag_id)
                SELECT $1, tag_id FROM UNNEST($2::uuid[]) AS tag_id
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(article.id.0)
            .bind(&tag_ids)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;
        }

        tx.commit().await.map_err(database_error)?;

        Ok(article)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, ArticleError> {
        sqlx::query_as::<_, ArticleRow>(&format!("{SELECT_ARTICLE} WHERE a.slug = $1"))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(Article::try_from)
            .transpose()
    }

    async fn list(&self, query: &ArticleQuery) -> Result<(Vec<Article>, i64), ArticleError> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "{SELECT_ARTICLE} {LIST_FILTER} ORDER BY a.created_at DESC LIMIT $4 OFFSET $5"
        ))
        .bind(query.tag.as_deref())
        .bind(query.author.as_deref())
        .bind(query.favorited.as_deref())
        .bind(query.page.limit)
        .bind(query.page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM articles a {LIST_FILTER}"
        ))
        .bind(query.tag.as_deref())
        .bind(query.author.as_deref())
        .bind(query.favorited.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok((into_articles(rows)?, total))
    }

    async fn feed(
        &self,
        follower: &UserId,
        page: &Pagination,
    ) -> Result<(Vec<Article>, i64), ArticleError> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "{SELECT_ARTICLE} {FEED_FILTER} ORDER BY a.created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(follower.0)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM articles a {FEED_FILTER}"
        ))
        .bind(follower.0)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok((into_articles(rows)?, total))
    }

    async fn update(&self, article: Article) -> Result<Article, ArticleError> {
        let result = sqlx::query(
            r#"
            UPDATE articles
            SET slug = $2, title = $3, description = $4, body = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(article.id.0)
        .bind(article.slug.as_str())
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.body)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &article))?;

        if result.rows_affected() == 0 {
            return Err(ArticleError::NotFound);
        }

        Ok(article)
    }

    async fn delete(&self, id: &ArticleId) -> Result<(), ArticleError> {
        // Comments, favorites and tag links go with it via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ArticleError::NotFound);
        }

        Ok(())
    }

    async fn add_favorite(&self, article: &ArticleId, user: &UserId) -> Result<bool, ArticleError> {
        let result = sqlx::query(
            r#"
            INSERT INTO article_favorites (article_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(article.0)
        .bind(user.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn remove_favorite(
        &self,
        article: &ArticleId,
        user: &UserId,
    ) -> Result<bool, ArticleError> {
        let result =
            sqlx::query("DELETE FROM article_favorites WHERE article_id = $1 AND user_id = $2")
                .bind(article.0)
                .bind(user.0)
                .execute(&self.pool)
                .await
                .map_err(database_error)?;

        Ok(result.rows_affected() == 1)
    }
}

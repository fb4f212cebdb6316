use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::article::models::ArticleId;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::user::models::UserId;

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    article_id: Uuid,
    author_id: Uuid,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: CommentId(row.id),
            article_id: ArticleId(row.article_id),
            author_id: UserId(row.author_id),
            body: row.body,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, article_id, author_id, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.id.0)
        .bind(comment.article_id.0)
        .bind(comment.author_id.0)
        .bind(&comment.body)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        Ok(comment)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, article_id, author_id, body, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        Ok(row.map(Comment::from))
    }

    async fn list_by_article(&self, article: &ArticleId) -> Result<Vec<Comment>, CommentError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, article_id, author_id, body, created_at, updated_at
            FROM comments
            WHERE article_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(article.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound);
        }

        Ok(())
    }
}

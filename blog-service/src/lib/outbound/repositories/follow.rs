use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::ports::FollowRepository;
use crate::domain::user::models::UserId;

pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn follow(&self, follower: &UserId, followed: &UserId) -> Result<(), ProfileError> {
        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, followed_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(follower.0)
        .bind(followed.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn unfollow(&self, follower: &UserId, followed: &UserId) -> Result<(), ProfileError> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followed_id = $2")
            .bind(follower.0)
            .bind(followed.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn is_following(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<bool, ProfileError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM follows WHERE follower_id = $1 AND followed_id = $2
            )
            "#,
        )
        .bind(follower.0)
        .bind(followed.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))
    }

    async fn followed_among(
        &self,
        follower: &UserId,
        candidates: &[UserId],
    ) -> Result<Vec<UserId>, ProfileError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let candidates: Vec<Uuid> = candidates.iter().map(|id| id.0).collect();

        let rows = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT followed_id FROM follows
            WHERE follower_id = $1 AND followed_id = ANY($2)
            "#,
        )
        .bind(follower.0)
        .bind(&candidates)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProfileError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(UserId).collect())
    }
}

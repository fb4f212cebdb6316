use async_trait::async_trait;
use sqlx::PgConnection;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::Tag;
use crate::domain::tag::models::TagId;
use crate::domain::tag::models::TagName;
use crate::domain::tag::ports::TagRepository;

#[derive(sqlx::FromRow)]
struct TagRow {
    id: Uuid,
    name: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = TagError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId(row.id),
            name: TagName::new(&row.name)?,
        })
    }
}

/// Id of the tag named `name`, inserting the tag if the name is new.
///
/// Runs on the caller's connection so the insert commits or rolls back with
/// the caller's transaction.
pub(super) async fn find_or_insert(
    conn: &mut PgConnection,
    name: &TagName,
) -> Result<TagId, sqlx::Error> {
    let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM tags WHERE name = $1")
        .bind(name.as_str())
        .fetch_optional(&mut *conn)
        .await?;
    if let Some(id) = existing {
        return Ok(TagId(id));
    }

    // The no-op update makes RETURNING yield the row a concurrent writer
    // inserted first.
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO tags (id, name)
        VALUES ($1, $2)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
    )
    .bind(TagId::new().0)
    .bind(name.as_str())
    .fetch_one(&mut *conn)
    .await?;

    Ok(TagId(id))
}

pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn list_all(&self) -> Result<Vec<Tag>, TagError> {
        let rows = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TagError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Tag::try_from).collect()
    }
}

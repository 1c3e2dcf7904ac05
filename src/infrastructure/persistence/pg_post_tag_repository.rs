//! PostgreSQL implementation of post-tag link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPostTagLink, PostTagLink};
use crate::domain::repositories::PostTagRepository;
use crate::error::AppError;

/// PostgreSQL repository for post-tag link storage.
pub struct PgPostTagRepository {
    pool: Arc<PgPool>,
}

impl PgPostTagRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostTagRepository for PgPostTagRepository {
    async fn create(&self, new_link: NewPostTagLink) -> Result<PostTagLink, AppError> {
        let link = sqlx::query_as::<_, PostTagLink>(
            r#"
            INSERT INTO post_tags (post_id, tag_id)
            VALUES ($1, $2)
            RETURNING id, post_id, tag_id
            "#,
        )
        .bind(new_link.post_id)
        .bind(new_link.tag_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn delete_by_post_id(&self, post_id: i64) -> Result<(), AppError> {
        // Zero deleted rows is a success: a post without links is valid.
        sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(post_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}

use crate::domain::{
    like::{entity::RegisteredLike, repository::LikeRepository},
    shared::{
        errors::DomainError,
        identity::{Clock, IdGenerator, IdKind},
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

pub struct SqlxLikeRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl SqlxLikeRepository {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { pool, ids, clock }
    }
}

#[async_trait]
impl LikeRepository for SqlxLikeRepository {
    async fn like_exists(&self, owner: &str, comment_id: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comment_likes WHERE comment_id = $1 AND owner = $2)",
        )
        .bind(comment_id)
        .bind(owner)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn add_like(
        &self,
        owner: &str,
        comment_id: &str,
    ) -> Result<RegisteredLike, DomainError> {
        let id = IdKind::Like.compose(&self.ids.generate());

        // A racing toggle that already inserted the pair wins; its row is returned.
        let (id, comment_id, owner) = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO comment_likes (id, comment_id, owner, created_at) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (comment_id, owner) DO UPDATE SET owner = EXCLUDED.owner \
             RETURNING id, comment_id, owner",
        )
        .bind(&id)
        .bind(comment_id)
        .bind(owner)
        .bind(self.clock.now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        Ok(RegisteredLike::new(id, comment_id, owner)?)
    }

    async fn delete_like(&self, owner: &str, comment_id: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM comment_likes WHERE comment_id = $1 AND owner = $2")
            .bind(comment_id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(())
    }

    async fn count_likes(&self, comment_id: &str) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comment_likes WHERE comment_id = $1")
            .bind(comment_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}

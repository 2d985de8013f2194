use crate::domain::{
    shared::{
        errors::DomainError,
        identity::{Clock, IdGenerator, IdKind},
    },
    thread::{
        entity::{RegisterThread, RegisteredThread, ThreadHeader},
        repository::ThreadRepository,
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

pub struct SqlxThreadRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl SqlxThreadRepository {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { pool, ids, clock }
    }
}

#[async_trait]
impl ThreadRepository for SqlxThreadRepository {
    async fn add_thread(
        &self,
        owner: &str,
        thread: &RegisterThread,
    ) -> Result<RegisteredThread, DomainError> {
        let id = IdKind::Thread.compose(&self.ids.generate());
        let now = self.clock.now();

        let (id, title, owner) = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO threads (id, title, body, owner, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $5) \
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(owner)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        Ok(RegisteredThread::new(id, title, owner)?)
    }

    async fn verify_thread_exists(&self, id: &str) -> Result<(), DomainError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        if exists {
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("thread {} not found", id)))
        }
    }

    async fn get_thread_header(&self, id: &str) -> Result<ThreadHeader, DomainError> {
        sqlx::query_as::<_, ThreadHeader>(
            "SELECT t.id, t.title, t.body, \
                    COALESCE(u.username, t.owner) AS username, \
                    t.created_at \
             FROM threads t \
             LEFT JOIN users u ON u.id = t.owner \
             WHERE t.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
        .ok_or_else(|| DomainError::NotFound(format!("thread {} not found", id)))
    }
}

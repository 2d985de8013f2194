use crate::domain::{
    comment::{
        entity::{
            CommentEntry, CommentLocation, CommentParent, RegisterComment, RegisteredComment,
        },
        repository::CommentRepository,
    },
    shared::{
        errors::DomainError,
        identity::{Clock, IdGenerator, IdKind},
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

const ENTRY_COLUMNS: &str = "c.id, COALESCE(u.username, c.owner) AS username, \
                             c.content, c.is_deleted, c.created_at";

pub struct SqlxCommentRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self { pool, ids, clock }
    }

    async fn comment_exists(&self, id: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn add_comment(
        &self,
        owner: &str,
        thread_id: &str,
        comment: &RegisterComment,
        parent: CommentParent,
    ) -> Result<RegisteredComment, DomainError> {
        let id = IdKind::Comment.compose(&self.ids.generate());
        let now = self.clock.now();

        let (id, content, owner) = sqlx::query_as::<_, (String, String, String)>(
            "INSERT INTO comments ( \
                id, thread_id, content, owner, parent_comment_id, is_deleted, \
                created_at, updated_at \
             ) VALUES ($1, $2, $3, $4, $5, false, $6, $6) \
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(thread_id)
        .bind(&comment.content)
        .bind(owner)
        .bind(parent.parent_id())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        Ok(RegisteredComment::new(id, content, owner)?)
    }

    async fn verify_comment_exists(&self, id: &str) -> Result<CommentLocation, DomainError> {
        let (thread_id, parent_comment_id) = sqlx::query_as::<_, (String, Option<String>)>(
            "SELECT thread_id, parent_comment_id FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
        .ok_or_else(|| DomainError::NotFound(format!("comment {} not found", id)))?;

        Ok(CommentLocation {
            thread_id,
            parent: parent_comment_id.into(),
        })
    }

    async fn delete_comment(&self, id: &str, owner: &str) -> Result<(), DomainError> {
        // Repeated deletes keep the first deletion timestamp.
        let result = sqlx::query(
            "UPDATE comments \
             SET is_deleted = true, \
                 updated_at = CASE WHEN is_deleted THEN updated_at ELSE $1 END \
             WHERE id = $2 AND owner = $3",
        )
        .bind(self.clock.now())
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        // Zero rows: either the comment vanished or someone else owns it.
        if self.comment_exists(id).await? {
            Err(DomainError::Forbidden(
                "cannot delete a comment owned by another user".to_string(),
            ))
        } else {
            debug!(comment_id = %id, "comment disappeared before delete");
            Err(DomainError::NotFound(format!("comment {} not found", id)))
        }
    }

    async fn list_top_level_comments(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentEntry>, DomainError> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} \
             FROM comments c \
             LEFT JOIN users u ON u.id = c.owner \
             WHERE c.thread_id = $1 AND c.parent_comment_id IS NULL \
             ORDER BY c.created_at ASC, c.id ASC"
        );
        sqlx::query_as::<_, CommentEntry>(&sql)
            .bind(thread_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn list_replies(&self, comment_id: &str) -> Result<Vec<CommentEntry>, DomainError> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} \
             FROM comments c \
             LEFT JOIN users u ON u.id = c.owner \
             WHERE c.parent_comment_id = $1 \
             ORDER BY c.created_at ASC, c.id ASC"
        );
        sqlx::query_as::<_, CommentEntry>(&sql)
            .bind(comment_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}

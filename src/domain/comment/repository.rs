use super::entity::{
    CommentEntry, CommentLocation, CommentParent, RegisterComment, RegisteredComment,
};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(
        &self,
        owner: &str,
        thread_id: &str,
        comment: &RegisterComment,
        parent: CommentParent,
    ) -> Result<RegisteredComment, DomainError>;

    /// Fails with `DomainError::NotFound` when no comment or reply has this id.
    async fn verify_comment_exists(&self, id: &str) -> Result<CommentLocation, DomainError>;

    /// Soft-deletes the comment if `owner` wrote it. Repeating the call is a no-op.
    ///
    /// Fails with `DomainError::Forbidden` when the comment belongs to someone else.
    async fn delete_comment(&self, id: &str, owner: &str) -> Result<(), DomainError>;

    /// Top-level comments of a thread, oldest first.
    async fn list_top_level_comments(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentEntry>, DomainError>;

    /// Replies to one comment, oldest first.
    async fn list_replies(&self, comment_id: &str) -> Result<Vec<CommentEntry>, DomainError>;
}

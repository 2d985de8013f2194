use super::entity::RegisteredLike;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn like_exists(&self, owner: &str, comment_id: &str) -> Result<bool, DomainError>;
    async fn add_like(&self, owner: &str, comment_id: &str)
    -> Result<RegisteredLike, DomainError>;
    async fn delete_like(&self, owner: &str, comment_id: &str) -> Result<(), DomainError>;
    /// Live count of like rows for the comment; never cached.
    async fn count_likes(&self, comment_id: &str) -> Result<i64, DomainError>;
}

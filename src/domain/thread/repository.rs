use super::entity::{RegisterThread, RegisteredThread, ThreadHeader};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(
        &self,
        owner: &str,
        thread: &RegisterThread,
    ) -> Result<RegisteredThread, DomainError>;

    /// Fails with `DomainError::NotFound` when no thread has this id.
    async fn verify_thread_exists(&self, id: &str) -> Result<(), DomainError>;

    async fn get_thread_header(&self, id: &str) -> Result<ThreadHeader, DomainError>;
}

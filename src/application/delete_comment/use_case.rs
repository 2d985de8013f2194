use crate::domain::{
    comment::repository::CommentRepository, shared::errors::DomainError,
    thread::repository::ThreadRepository,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Soft-deletes a comment or a reply; both go through the same path.
pub struct DeleteCommentUseCase {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(threads: Arc<dyn ThreadRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { threads, comments }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        comment_id: &str,
        owner: &str,
        thread_id: &str,
    ) -> Result<(), DomainError> {
        self.threads.verify_thread_exists(thread_id).await?;
        self.comments.verify_comment_exists(comment_id).await?;

        match self.comments.delete_comment(comment_id, owner).await {
            Ok(()) => {
                info!("comment soft-deleted");
                Ok(())
            }
            Err(err @ DomainError::Forbidden(_)) => {
                warn!("delete rejected: requester does not own the comment");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}

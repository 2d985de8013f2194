use crate::domain::{
    comment::repository::CommentRepository, like::repository::LikeRepository,
    shared::errors::DomainError, thread::repository::ThreadRepository,
};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    Unliked,
}

/// Single entry point for liking and unliking: the current state decides the direction.
///
/// The existence check and the mutation are separate statements. The unique
/// `(comment_id, owner)` constraint in storage keeps racing toggles from
/// producing two likes.
pub struct ToggleLikeUseCase {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl ToggleLikeUseCase {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        likes: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            threads,
            comments,
            likes,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        owner: &str,
        comment_id: &str,
        thread_id: &str,
    ) -> Result<LikeState, DomainError> {
        self.threads.verify_thread_exists(thread_id).await?;
        self.comments.verify_comment_exists(comment_id).await?;

        let state = if self.likes.like_exists(owner, comment_id).await? {
            self.likes.delete_like(owner, comment_id).await?;
            LikeState::Unliked
        } else {
            let like = self.likes.add_like(owner, comment_id).await?;
            debug!(like_id = %like.id, "like recorded");
            LikeState::Liked
        };
        Ok(state)
    }
}

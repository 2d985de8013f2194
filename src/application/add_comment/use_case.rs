use super::dto::AddCommentRequest;
use crate::domain::{
    comment::{
        entity::{CommentParent, RegisterComment, RegisteredComment},
        repository::CommentRepository,
    },
    shared::errors::DomainError,
    thread::repository::ThreadRepository,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

/// Adds a top-level comment, or a reply when the request names a parent.
pub struct AddCommentUseCase {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(threads: Arc<dyn ThreadRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { threads, comments }
    }

    /// Checks run in a fixed order: payload shape, thread, then parent comment.
    /// A parent must be a top-level comment of the same thread.
    #[instrument(skip(self, payload), fields(
        owner = %request.owner,
        thread_id = %request.thread_id,
        parent = ?request.parent_comment_id
    ))]
    pub async fn execute(
        &self,
        request: AddCommentRequest,
        payload: &Value,
    ) -> Result<RegisteredComment, DomainError> {
        let comment = RegisterComment::from_payload(payload)?;
        self.threads.verify_thread_exists(&request.thread_id).await?;

        let parent = match request.parent_comment_id {
            Some(parent_id) => {
                let location = self.comments.verify_comment_exists(&parent_id).await?;
                if location.thread_id != request.thread_id {
                    return Err(DomainError::NotFound(format!(
                        "comment {} not found in thread {}",
                        parent_id, request.thread_id
                    )));
                }
                if location.parent.is_reply() {
                    return Err(DomainError::ReplyNesting { parent_id });
                }
                CommentParent::Reply(parent_id)
            }
            None => CommentParent::TopLevel,
        };

        let is_reply = parent.is_reply();
        let added = self
            .comments
            .add_comment(&request.owner, &request.thread_id, &comment, parent)
            .await?;
        info!(comment_id = %added.id, is_reply, "comment created");
        Ok(added)
    }
}

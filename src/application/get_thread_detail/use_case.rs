use super::dto::{CommentDetail, ReplyDetail, ThreadDetail};
use crate::domain::{
    comment::{
        entity::{CommentEntry, CommentParent},
        repository::CommentRepository,
    },
    like::repository::LikeRepository,
    shared::errors::DomainError,
    thread::repository::ThreadRepository,
};
use futures_util::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Builds the nested, masked and counted view of one thread.
///
/// Replies and like counts for different top-level comments are fetched
/// concurrently. `try_join_all` yields results in input order, so the
/// comment list keeps the store's `created_at` ordering no matter which
/// fetch finishes first.
pub struct GetThreadDetailUseCase {
    threads: Arc<dyn ThreadRepository>,
    comments: Arc<dyn CommentRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl GetThreadDetailUseCase {
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
    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail, DomainError> {
        self.threads.verify_thread_exists(thread_id).await?;
        let header = self.threads.get_thread_header(thread_id).await?;
        let entries = self.comments.list_top_level_comments(thread_id).await?;

        let comments =
            try_join_all(entries.into_iter().map(|entry| self.build_comment(entry))).await?;
        debug!(comments = comments.len(), "thread detail assembled");

        Ok(ThreadDetail {
            id: header.id,
            title: header.title,
            body: header.body,
            date: header.created_at,
            username: header.username,
            comments,
        })
    }

    async fn build_comment(&self, entry: CommentEntry) -> Result<CommentDetail, DomainError> {
        let (replies, like_count) = tokio::try_join!(
            self.comments.list_replies(&entry.id),
            self.likes.count_likes(&entry.id),
        )?;

        let reply_position = CommentParent::Reply(entry.id.clone());
        let replies = replies
            .into_iter()
            .map(|reply| ReplyDetail {
                content: reply.display_content(&reply_position),
                id: reply.id,
                date: reply.created_at,
                username: reply.username,
            })
            .collect();

        Ok(CommentDetail {
            content: entry.display_content(&CommentParent::TopLevel),
            id: entry.id,
            date: entry.created_at,
            username: entry.username,
            like_count,
            replies,
        })
    }
}

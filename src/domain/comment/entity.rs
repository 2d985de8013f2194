use crate::domain::shared::{
    errors::{EntityKind, PayloadError},
    payload::{ensure_valid, required_strings},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;
use validator::Validate;

/// Shown in place of a soft-deleted top-level comment.
pub const DELETED_COMMENT_CONTENT: &str = "**comment deleted**";
/// Shown in place of a soft-deleted reply.
pub const DELETED_REPLY_CONTENT: &str = "**reply deleted**";

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RegisterComment {
    #[validate(length(min = 1))]
    pub content: String,
}

impl RegisterComment {
    pub fn new(content: String) -> Result<Self, PayloadError> {
        ensure_valid(Self { content }, EntityKind::RegisterComment)
    }

    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let [content] = required_strings(payload, EntityKind::RegisterComment, ["content"])?;
        Self::new(content)
    }
}

/// Projection returned after a comment or reply is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Validate)]
#[ts(export)]
pub struct RegisteredComment {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1))]
    pub owner: String,
}

impl RegisteredComment {
    pub fn new(id: String, content: String, owner: String) -> Result<Self, PayloadError> {
        ensure_valid(Self { id, content, owner }, EntityKind::RegisteredComment)
    }

    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let [id, content, owner] = required_strings(
            payload,
            EntityKind::RegisteredComment,
            ["id", "content", "owner"],
        )?;
        Self::new(id, content, owner)
    }
}

/// Position of a comment in the one-level reply tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentParent {
    TopLevel,
    Reply(String),
}

impl CommentParent {
    pub fn parent_id(&self) -> Option<&str> {
        match self {
            Self::TopLevel => None,
            Self::Reply(id) => Some(id),
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self, Self::Reply(_))
    }
}

impl From<Option<String>> for CommentParent {
    fn from(parent: Option<String>) -> Self {
        parent.map_or(Self::TopLevel, Self::Reply)
    }
}

/// Where an existing comment lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLocation {
    pub thread_id: String,
    pub parent: CommentParent,
}

/// Stored comment (or reply) joined with its author's username.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CommentEntry {
    pub id: String,
    pub username: String,
    pub content: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl CommentEntry {
    /// Content as it may be shown to readers; stored text never leaks once deleted.
    pub fn display_content(&self, parent: &CommentParent) -> String {
        match (self.is_deleted, parent) {
            (false, _) => self.content.clone(),
            (true, CommentParent::TopLevel) => DELETED_COMMENT_CONTENT.to_string(),
            (true, CommentParent::Reply(_)) => DELETED_REPLY_CONTENT.to_string(),
        }
    }
}

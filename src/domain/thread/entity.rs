use crate::domain::shared::{
    errors::{EntityKind, PayloadError},
    payload::{ensure_valid, required_strings},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;
use validator::Validate;

/// Payload for opening a new thread.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RegisterThread {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub body: String,
}

impl RegisterThread {
    pub fn new(title: String, body: String) -> Result<Self, PayloadError> {
        ensure_valid(Self { title, body }, EntityKind::RegisterThread)
    }

    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let [title, body] =
            required_strings(payload, EntityKind::RegisterThread, ["title", "body"])?;
        Self::new(title, body)
    }
}

/// Projection returned after a thread is created. Carries neither the body
/// nor any timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Validate)]
#[ts(export)]
pub struct RegisteredThread {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub owner: String,
}

impl RegisteredThread {
    pub fn new(id: String, title: String, owner: String) -> Result<Self, PayloadError> {
        ensure_valid(Self { id, title, owner }, EntityKind::RegisteredThread)
    }

    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let [id, title, owner] = required_strings(
            payload,
            EntityKind::RegisteredThread,
            ["id", "title", "owner"],
        )?;
        Self::new(id, title, owner)
    }
}

/// Thread header as read back for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ThreadHeader {
    pub id: String,
    pub title: String,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

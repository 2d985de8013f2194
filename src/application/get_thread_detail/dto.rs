use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Full nested view of a thread as served to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CommentDetail {
    pub id: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub username: String,
    #[ts(type = "number")]
    pub like_count: i64,
    pub replies: Vec<ReplyDetail>,
}

/// Replies carry no like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReplyDetail {
    pub id: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub username: String,
}

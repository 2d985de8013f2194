use crate::domain::shared::{
    errors::{EntityKind, PayloadError},
    payload::{ensure_valid, required_strings},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredLike {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub comment_id: String,
    #[validate(length(min = 1))]
    pub owner: String,
}

impl RegisteredLike {
    pub fn new(id: String, comment_id: String, owner: String) -> Result<Self, PayloadError> {
        ensure_valid(
            Self {
                id,
                comment_id,
                owner,
            },
            EntityKind::RegisteredLike,
        )
    }

    pub fn from_payload(payload: &Value) -> Result<Self, PayloadError> {
        let [id, comment_id, owner] = required_strings(
            payload,
            EntityKind::RegisteredLike,
            ["id", "commentId", "owner"],
        )?;
        Self::new(id, comment_id, owner)
    }
}

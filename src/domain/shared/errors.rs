use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error(transparent)]
    InvalidPayload(#[from] PayloadError),
    /// Replies nest one level only; `parent_id` is itself a reply.
    #[error("Cannot reply to reply {parent_id}")]
    ReplyNesting { parent_id: String },
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

/// Entity whose shape check rejected a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    RegisterThread,
    RegisteredThread,
    RegisterComment,
    RegisteredComment,
    RegisteredLike,
}

impl EntityKind {
    fn code(self) -> &'static str {
        match self {
            Self::RegisterThread => "REGISTER_THREAD",
            Self::RegisteredThread => "REGISTERED_THREAD",
            Self::RegisterComment => "REGISTER_COMMENT",
            Self::RegisteredComment => "REGISTERED_COMMENT",
            Self::RegisteredLike => "REGISTERED_LIKE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadErrorKind {
    /// A required property is absent, null or empty.
    MissingProperty,
    /// A property is present but is not a string.
    InvalidDataType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub struct PayloadError {
    pub entity: EntityKind,
    pub kind: PayloadErrorKind,
}

impl PayloadError {
    pub fn missing(entity: EntityKind) -> Self {
        Self {
            entity,
            kind: PayloadErrorKind::MissingProperty,
        }
    }

    pub fn invalid_type(entity: EntityKind) -> Self {
        Self {
            entity,
            kind: PayloadErrorKind::InvalidDataType,
        }
    }

    /// Stable machine-readable discriminator, e.g. `REGISTER_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`.
    pub fn code(&self) -> String {
        let suffix = match self.kind {
            PayloadErrorKind::MissingProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            PayloadErrorKind::InvalidDataType => "NOT_MEET_DATA_TYPE_SPECIFICATION",
        };
        format!("{}.{}", self.entity.code(), suffix)
    }

    /// Message safe to show to API clients.
    pub fn user_message(&self) -> &'static str {
        use EntityKind::*;
        use PayloadErrorKind::*;
        match (self.entity, self.kind) {
            (RegisterThread, MissingProperty) => {
                "cannot create a new thread because a required property is missing"
            }
            (RegisterThread, InvalidDataType) => {
                "cannot create a new thread because a property has the wrong data type"
            }
            (RegisterComment, MissingProperty) => {
                "cannot create a new comment because a required property is missing"
            }
            (RegisterComment, InvalidDataType) => {
                "cannot create a new comment because a property has the wrong data type"
            }
            (_, MissingProperty) => "stored record is missing a required property",
            (_, InvalidDataType) => "stored record has a property with the wrong data type",
        }
    }
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

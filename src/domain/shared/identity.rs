use chrono::{DateTime, Utc};

/// Source of raw unique identifiers. Callers add the kind prefix.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Every persisted id starts with the prefix of its kind, so a thread id can
/// never be mistaken for a comment or like id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Thread,
    Comment,
    Like,
}

impl IdKind {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Thread => "thread-",
            Self::Comment => "comment-",
            Self::Like => "like-",
        }
    }

    pub fn compose(self, raw: &str) -> String {
        format!("{}{}", self.prefix(), raw)
    }

    pub fn matches(self, id: &str) -> bool {
        id.strip_prefix(self.prefix())
            .is_some_and(|rest| !rest.is_empty())
    }
}

use crate::domain::shared::identity::{Clock, IdGenerator};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Time-ordered UUIDv7 in simple (hyphen-free) form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::now_v7().simple().to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

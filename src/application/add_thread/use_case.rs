use crate::domain::{
    shared::errors::DomainError,
    thread::{
        entity::{RegisterThread, RegisteredThread},
        repository::ThreadRepository,
    },
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AddThreadUseCase {
    threads: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(threads: Arc<dyn ThreadRepository>) -> Self {
        Self { threads }
    }

    /// Validates the payload and opens a thread owned by `owner`.
    ///
    /// The payload is checked before any store call, so a rejected payload
    /// never leaves a partial thread behind.
    #[instrument(skip(self, payload))]
    pub async fn execute(
        &self,
        owner: &str,
        payload: &Value,
    ) -> Result<RegisteredThread, DomainError> {
        let thread = RegisterThread::from_payload(payload)?;
        let added = self.threads.add_thread(owner, &thread).await?;
        info!(thread_id = %added.id, "thread created");
        Ok(added)
    }
}

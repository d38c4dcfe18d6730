// In memory implementation of the DomainOutbox port.
//
// Responsibilities
// - Collect enqueued rows in a list for inspection.
// - Reject a second row for the same (stream, version).

use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryDomainOutbox {
    rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<(String, i64)>>,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn rows(&self) -> Vec<OutboxRow> {
        self.rows.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if row.topic.is_empty() {
            return Err(OutboxError::Validation("topic must not be empty".into()));
        }
        let key = (row.stream_id.clone(), row.stream_version);
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(key) {
                return Err(OutboxError::Duplicate {
                    stream_id: row.stream_id,
                    stream_version: row.stream_version,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }
}

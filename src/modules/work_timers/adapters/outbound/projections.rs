use crate::modules::work_timers::core::projections::WorkTimerPatch;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerRow;
use async_trait::async_trait;

#[async_trait]
pub trait WorkTimerProjectionRepository: Send + Sync {
    /// Ignored when the stored row has already seen the same or a later event.
    async fn upsert(&self, row: WorkTimerRow) -> anyhow::Result<()>;

    /// Returns false when the row is missing or has already seen `last_event_id`.
    async fn patch(
        &self,
        timer_id: &str,
        patch: WorkTimerPatch,
        last_event_id: &str,
    ) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}

/// Stream version encoded in a "stream_id:version" event id.
pub fn event_version(last_event_id: &str) -> Option<i64> {
    last_event_id
        .rsplit_once(':')
        .and_then(|(_, version)| version.parse().ok())
}

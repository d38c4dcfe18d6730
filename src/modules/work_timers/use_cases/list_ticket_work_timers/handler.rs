use crate::modules::work_timers::adapters::outbound::projections::{
    WatermarkRepository, WorkTimerProjectionRepository, event_version,
};
use crate::modules::work_timers::core::events::WorkTimerEvent;
use crate::modules::work_timers::core::projections::{Mutation, apply};
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::queries_port::WorkTimerQueries;
use crate::shared::core::primitives::seconds_to_hours;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: WorkTimerProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: WorkTimerProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &WorkTimerEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Patch {
                    timer_id,
                    patch,
                    last_event_id,
                } => {
                    if !self
                        .repository
                        .patch(&timer_id, patch, &last_event_id)
                        .await?
                    {
                        tracing::debug!(%timer_id, %last_event_id, "projection patch skipped");
                    }
                }
            }
        }
        self.watermark_repository
            .set(&self.watermark_key(stream_id), &format!("{stream_id}:{version}"))
            .await?;
        Ok(())
    }

    /// Watermarks are kept per stream.
    pub fn watermark_key(&self, stream_id: &str) -> String {
        format!("{}/{stream_id}", self.name)
    }

    /// Last stream version applied to the read model, 0 when none.
    pub async fn projected_version(&self, stream_id: &str) -> anyhow::Result<i64> {
        Ok(self
            .watermark_repository
            .get(&self.watermark_key(stream_id))
            .await?
            .as_deref()
            .and_then(event_version)
            .unwrap_or(0))
    }

    /// Apply every event of the stream past the watermark. Returns how many were applied.
    pub async fn catch_up<TEventStore>(
        &self,
        stream_id: &str,
        event_store: &TEventStore,
    ) -> anyhow::Result<usize>
    where
        TEventStore: EventStore<WorkTimerEvent> + ?Sized,
    {
        let projected = self.projected_version(stream_id).await?;
        let stream = event_store.load(stream_id).await?;
        let skip = usize::try_from(projected).unwrap_or(0);
        let pending = stream.events.get(skip..).unwrap_or_default();
        if pending.is_empty() {
            return Ok(0);
        }
        tracing::debug!(stream_id, projected, pending = pending.len(), "catching up read model");
        self.apply_all(stream_id, projected, pending).await?;
        Ok(pending.len())
    }

    /// Project events appended after `starting_version`, in order.
    pub async fn apply_all(
        &self,
        stream_id: &str,
        starting_version: i64,
        events: &[WorkTimerEvent],
    ) -> anyhow::Result<()> {
        for (i, event) in events.iter().enumerate() {
            self.apply_one(stream_id, starting_version + i as i64 + 1, event)
                .await?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketWorkTimers {
    pub timers: Vec<WorkTimerView>,
    /// Hours logged by stopped timers.
    pub total_hours: f64,
}

pub async fn list_ticket_work_timers(
    queries: &(dyn WorkTimerQueries + Send + Sync),
    ticket_id: &str,
) -> anyhow::Result<TicketWorkTimers> {
    let timers = queries.list_by_ticket(ticket_id).await?;
    let total_seconds: i64 = timers.iter().filter_map(|timer| timer.total_seconds).sum();
    Ok(TicketWorkTimers {
        timers,
        total_hours: seconds_to_hours(total_seconds),
    })
}

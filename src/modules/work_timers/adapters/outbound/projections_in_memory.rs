// In memory projection repository, watermark repository and work timer queries.
//
// Responsibilities
// - Store read model rows keyed by timer id.
// - Skip upserts and patches whose event is not newer than the row's last event.
// - Track the last processed event per projector.

use crate::modules::work_timers::adapters::outbound::projections::{
    WatermarkRepository, WorkTimerProjectionRepository, event_version,
};
use crate::modules::work_timers::core::projections::WorkTimerPatch;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::{
    WorkTimerRow, WorkTimerView,
};
use crate::modules::work_timers::use_cases::list_ticket_work_timers::queries_port::WorkTimerQueries;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<String, WorkTimerRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self, what: &str) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("{what} repository offline");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl WorkTimerProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: WorkTimerRow) -> anyhow::Result<()> {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        let seen = guard
            .get(&row.timer_id)
            .and_then(|existing| existing.last_event_id.as_deref())
            .and_then(event_version);
        if let (Some(seen), Some(incoming)) =
            (seen, row.last_event_id.as_deref().and_then(event_version))
            && incoming <= seen
        {
            return Ok(());
        }
        guard.insert(row.timer_id.clone(), row);
        Ok(())
    }

    async fn patch(
        &self,
        timer_id: &str,
        patch: WorkTimerPatch,
        last_event_id: &str,
    ) -> anyhow::Result<bool> {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        let Some(row) = guard.get_mut(timer_id) else {
            return Ok(false);
        };
        let seen = row.last_event_id.as_deref().and_then(event_version);
        if let (Some(seen), Some(incoming)) = (seen, event_version(last_event_id))
            && incoming <= seen
        {
            return Ok(false);
        }
        patch.apply_to(row);
        row.last_event_id = Some(last_event_id.to_string());
        Ok(true)
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online("Watermark")?;
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.ensure_online("Watermark")?;
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl WorkTimerQueries for InMemoryProjections {
    async fn find_by_id(&self, timer_id: &str) -> anyhow::Result<Option<WorkTimerView>> {
        self.ensure_online("Projections")?;
        Ok(self
            .rows
            .read()
            .await
            .get(timer_id)
            .cloned()
            .map(WorkTimerView::from))
    }

    async fn active_for_ticket(&self, ticket_id: &str) -> anyhow::Result<Option<WorkTimerView>> {
        self.ensure_online("Projections")?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|row| row.ticket_id == ticket_id && row.status.is_active())
            .max_by_key(|row| row.start_time)
            .cloned()
            .map(WorkTimerView::from))
    }

    async fn list_by_ticket(&self, ticket_id: &str) -> anyhow::Result<Vec<WorkTimerView>> {
        self.ensure_online("Projections")?;
        let guard = self.rows.read().await;
        let mut items: Vec<WorkTimerRow> = guard
            .values()
            .filter(|row| row.ticket_id == ticket_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.start_time
                .cmp(&a.start_time)
                .then_with(|| b.timer_id.cmp(&a.timer_id))
        });
        Ok(items.into_iter().map(WorkTimerView::from).collect())
    }
}

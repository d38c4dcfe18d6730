use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use async_trait::async_trait;

#[async_trait]
pub trait WorkTimerQueries {
    async fn find_by_id(&self, timer_id: &str) -> anyhow::Result<Option<WorkTimerView>>;

    /// The running or paused timer of a ticket, if any.
    async fn active_for_ticket(&self, ticket_id: &str) -> anyhow::Result<Option<WorkTimerView>>;

    /// Every timer of a ticket, newest first.
    async fn list_by_ticket(&self, ticket_id: &str) -> anyhow::Result<Vec<WorkTimerView>>;
}

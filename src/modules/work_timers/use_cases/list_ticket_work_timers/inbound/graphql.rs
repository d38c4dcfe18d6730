use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::work_timers::core::state::PauseInterval;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::handler::list_ticket_work_timers;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlPauseInterval {
    pub pause_start: i64,
    pub pause_end: i64,
}

impl From<PauseInterval> for GqlPauseInterval {
    fn from(interval: PauseInterval) -> Self {
        Self {
            pause_start: interval.pause_start,
            pause_end: interval.pause_end,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlWorkTimer {
    pub id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub status: String,
    pub start_time: i64,
    pub last_pause_start: Option<i64>,
    pub total_paused_time: i64,
    pub description: Option<String>,
    pub pauses: Vec<GqlPauseInterval>,
    pub stopped_at: Option<i64>,
    pub total_seconds: Option<i64>,
    pub total_hours: Option<f64>,
    pub auto_consumed: bool,
}

impl From<WorkTimerView> for GqlWorkTimer {
    fn from(v: WorkTimerView) -> Self {
        Self {
            id: v.id,
            ticket_id: v.ticket_id,
            user_id: v.user_id,
            status: v.status.as_str().to_string(),
            start_time: v.start_time,
            last_pause_start: v.last_pause_start,
            total_paused_time: v.total_paused_time,
            description: v.description,
            pauses: v.pauses.into_iter().map(Into::into).collect(),
            stopped_at: v.stopped_at,
            total_seconds: v.total_seconds,
            total_hours: v.total_hours,
            auto_consumed: v.auto_consumed,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTicketWorkTimers {
    pub timers: Vec<GqlWorkTimer>,
    pub total_hours: f64,
}

#[derive(Default)]
pub struct TicketWorkTimersQuery;

#[Object]
impl TicketWorkTimersQuery {
    async fn ticket_work_timers(
        &self,
        context: &Context<'_>,
        ticket_id: String,
    ) -> GqlResult<GqlTicketWorkTimers> {
        let state = context.data_unchecked::<AppState>();
        let listed = list_ticket_work_timers(state.queries.as_ref(), &ticket_id).await?;
        Ok(GqlTicketWorkTimers {
            timers: listed.timers.into_iter().map(Into::into).collect(),
            total_hours: listed.total_hours,
        })
    }
}

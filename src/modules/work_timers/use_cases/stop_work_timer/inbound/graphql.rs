use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::work_timers::adapters::inbound::error_response::graphql_error;
use crate::modules::work_timers::use_cases::stop_work_timer::handler::{
    StopSummary, stop_work_timer,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlStopSummary {
    pub total_hours: f64,
    pub total_seconds: i64,
    pub auto_consumed: bool,
}

impl From<StopSummary> for GqlStopSummary {
    fn from(summary: StopSummary) -> Self {
        Self {
            total_hours: summary.total_hours,
            total_seconds: summary.total_seconds,
            auto_consumed: summary.auto_consumed,
        }
    }
}

#[derive(Default)]
pub struct StopWorkTimerMutation;

#[Object]
impl StopWorkTimerMutation {
    async fn stop_work_timer(
        &self,
        context: &Context<'_>,
        timer_id: String,
    ) -> GqlResult<GqlStopSummary> {
        let state = context.data_unchecked::<AppState>();
        let summary = stop_work_timer(state, &timer_id)
            .await
            .map_err(graphql_error)?;
        Ok(summary.into())
    }
}

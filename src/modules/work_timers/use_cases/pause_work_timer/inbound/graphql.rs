use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::work_timers::adapters::inbound::error_response::graphql_error;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::inbound::graphql::GqlWorkTimer;
use crate::modules::work_timers::use_cases::pause_work_timer::handler::pause_work_timer;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct PauseWorkTimerMutation;

#[Object]
impl PauseWorkTimerMutation {
    async fn pause_work_timer(
        &self,
        context: &Context<'_>,
        timer_id: String,
    ) -> GqlResult<GqlWorkTimer> {
        let state = context.data_unchecked::<AppState>();
        let timer = pause_work_timer(state, &timer_id)
            .await
            .map_err(graphql_error)?;
        Ok(timer.into())
    }
}

use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::work_timers::adapters::inbound::error_response::graphql_error;
use crate::modules::work_timers::use_cases::get_active_work_timer::handler::get_active_work_timer;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::inbound::graphql::GqlWorkTimer;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ActiveWorkTimerQuery;

#[Object]
impl ActiveWorkTimerQuery {
    async fn active_work_timer(
        &self,
        context: &Context<'_>,
        ticket_id: String,
    ) -> GqlResult<Option<GqlWorkTimer>> {
        let state = context.data_unchecked::<AppState>();
        let timer = get_active_work_timer(state, &ticket_id)
            .await
            .map_err(graphql_error)?;
        Ok(timer.map(Into::into))
    }
}

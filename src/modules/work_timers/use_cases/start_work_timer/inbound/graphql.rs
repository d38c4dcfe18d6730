use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::work_timers::adapters::inbound::error_response::graphql_error;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::inbound::graphql::GqlWorkTimer;
use crate::modules::work_timers::use_cases::start_work_timer::handler::start_work_timer;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct StartWorkTimerMutation;

#[Object]
impl StartWorkTimerMutation {
    async fn start_work_timer(
        &self,
        context: &Context<'_>,
        ticket_id: String,
        user_id: String,
        description: Option<String>,
    ) -> GqlResult<GqlWorkTimer> {
        let state = context.data_unchecked::<AppState>();
        let timer = start_work_timer(state, &ticket_id, &user_id, description)
            .await
            .map_err(graphql_error)?;
        Ok(timer.into())
    }
}

use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

use crate::modules::work_timers::use_cases::get_active_work_timer::inbound::graphql::ActiveWorkTimerQuery;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::inbound::graphql::TicketWorkTimersQuery;
use crate::modules::work_timers::use_cases::pause_work_timer::inbound::graphql::PauseWorkTimerMutation;
use crate::modules::work_timers::use_cases::resume_work_timer::inbound::graphql::ResumeWorkTimerMutation;
use crate::modules::work_timers::use_cases::start_work_timer::inbound::graphql::StartWorkTimerMutation;
use crate::modules::work_timers::use_cases::stop_work_timer::inbound::graphql::StopWorkTimerMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ActiveWorkTimerQuery, TicketWorkTimersQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    StartWorkTimerMutation,
    PauseWorkTimerMutation,
    ResumeWorkTimerMutation,
    StopWorkTimerMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::work_timers::adapters::inbound::error_response::error_response;
use crate::modules::work_timers::use_cases::get_active_work_timer::handler::get_active_work_timer;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerEnvelope;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> impl IntoResponse {
    match get_active_work_timer(&state, &ticket_id).await {
        Ok(timer) => Json(WorkTimerEnvelope { timer }).into_response(),
        Err(error) => error_response(error),
    }
}

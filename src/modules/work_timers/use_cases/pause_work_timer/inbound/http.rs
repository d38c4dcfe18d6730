use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::work_timers::adapters::inbound::error_response::error_response;
use crate::modules::work_timers::use_cases::pause_work_timer::handler::pause_work_timer;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerEnvelope;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(timer_id): Path<String>,
) -> impl IntoResponse {
    match pause_work_timer(&state, &timer_id).await {
        Ok(timer) => Json(WorkTimerEnvelope { timer: Some(timer) }).into_response(),
        Err(error) => error_response(error),
    }
}

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::work_timers::adapters::inbound::error_response::error_response;
use crate::modules::work_timers::use_cases::stop_work_timer::handler::stop_work_timer;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(timer_id): Path<String>,
) -> impl IntoResponse {
    match stop_work_timer(&state, &timer_id).await {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => error_response(error),
    }
}

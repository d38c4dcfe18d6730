use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::work_timers::adapters::inbound::current_user::CurrentUser;
use crate::modules::work_timers::adapters::inbound::error_response::error_response;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerEnvelope;
use crate::modules::work_timers::use_cases::start_work_timer::handler::start_work_timer;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StartWorkTimerBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(ticket_id): Path<String>,
    body: Result<Json<StartWorkTimerBody>, JsonRejection>,
) -> impl IntoResponse {
    // The body is optional; only a malformed JSON body is refused.
    let body = match body {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => StartWorkTimerBody::default(),
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match start_work_timer(&state, &ticket_id, &user_id, body.description).await {
        Ok(timer) => (
            StatusCode::CREATED,
            Json(WorkTimerEnvelope { timer: Some(timer) }),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::work_timers::use_cases::list_ticket_work_timers::handler::{
    TicketWorkTimers, list_ticket_work_timers,
};
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use crate::shell::state::AppState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketWorkTimersResponse {
    pub timers: Vec<WorkTimerView>,
    pub total_hours: f64,
}

impl From<TicketWorkTimers> for TicketWorkTimersResponse {
    fn from(listed: TicketWorkTimers) -> Self {
        Self {
            timers: listed.timers,
            total_hours: listed.total_hours,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> impl IntoResponse {
    match list_ticket_work_timers(state.queries.as_ref(), &ticket_id).await {
        Ok(listed) => Json(TicketWorkTimersResponse::from(listed)).into_response(),
        Err(error) => {
            tracing::error!(%ticket_id, %error, "listing work timers failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

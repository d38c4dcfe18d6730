// Maps application errors onto the REST contract.
//
// 400 { error, timer }  another timer is active on the ticket
// 400 { error }         wrong lifecycle step, ineligible ticket
// 404 { error }         unknown timer id
// 409 { error }         stream still contended after one retry
// 500 { error }         backend failures

use crate::modules::work_timers::application::errors::ApplicationError;
use crate::modules::work_timers::core::decision::DecideError;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use async_graphql::ErrorExtensions;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const ACTIVE_TIMER_EXISTS: &str = "An active timer already exists for this ticket";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer: Option<WorkTimerView>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            timer: None,
        }
    }
}

pub fn error_parts(error: &ApplicationError) -> (StatusCode, ErrorBody) {
    match error {
        ApplicationError::Domain(DecideError::ActiveTimerExists { timer }) => (
            StatusCode::BAD_REQUEST,
            ErrorBody {
                error: ACTIVE_TIMER_EXISTS.to_string(),
                timer: Some(WorkTimerView::from_timer(timer, timer.status())),
            },
        ),
        ApplicationError::Domain(reason) => {
            (StatusCode::BAD_REQUEST, ErrorBody::new(reason.to_string()))
        }
        ApplicationError::Ineligible(reason) => {
            (StatusCode::BAD_REQUEST, ErrorBody::new(reason.to_string()))
        }
        ApplicationError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorBody::new(error.to_string())),
        ApplicationError::VersionConflict(_) if error.is_version_mismatch() => (
            StatusCode::CONFLICT,
            ErrorBody::new("The timer was changed by another session, reload and try again"),
        ),
        ApplicationError::VersionConflict(_)
        | ApplicationError::Outbox(_)
        | ApplicationError::Unexpected(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::new("Internal server error"),
        ),
    }
}

pub fn error_response(error: ApplicationError) -> Response {
    let (status, body) = error_parts(&error);
    if status.is_server_error() {
        tracing::error!(%error, "work timer request failed");
    } else {
        tracing::debug!(%error, status = status.as_u16(), "work timer request rejected");
    }
    (status, Json(body)).into_response()
}

/// Same message as the REST body, with the HTTP status under `code`.
pub fn graphql_error(error: ApplicationError) -> async_graphql::Error {
    let (status, body) = error_parts(&error);
    if status.is_server_error() {
        tracing::error!(%error, "work timer graphql request failed");
    }
    let timer_id = body.timer.map(|timer| timer.id);
    async_graphql::Error::new(body.error).extend_with(|_, extensions| {
        extensions.set("code", i32::from(status.as_u16()));
        if let Some(timer_id) = timer_id {
            extensions.set("timerId", timer_id);
        }
    })
}

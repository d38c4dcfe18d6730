// Port the time tracker uses to reach the work timer service.

use crate::modules::work_timers::adapters::inbound::error_response::ErrorBody;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::inbound::http::TicketWorkTimersResponse;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use crate::modules::work_timers::use_cases::stop_work_timer::handler::StopSummary;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Another timer is active on the ticket.
    #[error("{message}")]
    Conflict {
        message: String,
        timer: Option<WorkTimerView>,
    },

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("work timer not found")]
    NotFound,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Interpret a non-success status and its optional `{ error, timer }` body.
    pub fn from_response(status: u16, body: Option<ErrorBody>) -> Self {
        match (status, body) {
            (404, _) => ApiError::NotFound,
            (400, Some(ErrorBody {
                error,
                timer: Some(timer),
            })) => ApiError::Conflict {
                message: error,
                timer: Some(timer),
            },
            (status, Some(body)) => ApiError::Rejected {
                status,
                message: body.error,
            },
            (status, None) => ApiError::Rejected {
                status,
                message: format!("request failed with status {status}"),
            },
        }
    }

    /// Message the server sent, when there was one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Conflict { message, .. } | ApiError::Rejected { message, .. } => {
                Some(message)
            }
            _ => None,
        }
    }

    pub fn conflicting_timer(&self) -> Option<&WorkTimerView> {
        match self {
            ApiError::Conflict { timer, .. } => timer.as_ref(),
            _ => None,
        }
    }
}

#[async_trait]
pub trait WorkTimerApi: Send + Sync {
    async fn get_active(&self, ticket_id: &str) -> Result<Option<WorkTimerView>, ApiError>;
    async fn start(
        &self,
        ticket_id: &str,
        description: Option<&str>,
    ) -> Result<WorkTimerView, ApiError>;
    async fn pause(&self, timer_id: &str) -> Result<WorkTimerView, ApiError>;
    async fn resume(&self, timer_id: &str) -> Result<WorkTimerView, ApiError>;
    async fn stop(&self, timer_id: &str) -> Result<StopSummary, ApiError>;
    async fn list(&self, ticket_id: &str) -> Result<TicketWorkTimersResponse, ApiError>;
}

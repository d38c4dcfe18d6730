// In-process WorkTimerApi: runs the use-case handlers directly and maps
// failures through the same error bodies the HTTP adapter serves.

use crate::modules::work_timers::adapters::inbound::error_response::{ErrorBody, error_parts};
use crate::modules::work_timers::application::errors::ApplicationError;
use crate::modules::work_timers::client::api::{ApiError, WorkTimerApi};
use crate::modules::work_timers::use_cases::get_active_work_timer::handler::get_active_work_timer;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::handler::list_ticket_work_timers;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::inbound::http::TicketWorkTimersResponse;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use crate::modules::work_timers::use_cases::pause_work_timer::handler::pause_work_timer;
use crate::modules::work_timers::use_cases::resume_work_timer::handler::resume_work_timer;
use crate::modules::work_timers::use_cases::start_work_timer::handler::start_work_timer;
use crate::modules::work_timers::use_cases::stop_work_timer::handler::{StopSummary, stop_work_timer};
use crate::shell::state::AppState;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiCall {
    GetActive,
    Start,
    Pause,
    Resume,
    Stop,
    List,
}

pub struct InProcessWorkTimerApi {
    state: AppState,
    user_id: String,
    injected: Mutex<HashMap<ApiCall, VecDeque<ApiError>>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl InProcessWorkTimerApi {
    pub fn new(state: AppState, user_id: impl Into<String>) -> Self {
        Self {
            state,
            user_id: user_id.into(),
            injected: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The next `call` fails with `error` instead of reaching the handlers.
    pub async fn fail_next(&self, call: ApiCall, error: ApiError) {
        self.injected
            .lock()
            .await
            .entry(call)
            .or_default()
            .push_back(error);
    }

    pub async fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().await.clone()
    }

    pub async fn count(&self, call: ApiCall) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|recorded| **recorded == call)
            .count()
    }

    async fn enter(&self, call: ApiCall) -> Result<(), ApiError> {
        self.calls.lock().await.push(call);
        match self
            .injected
            .lock()
            .await
            .get_mut(&call)
            .and_then(VecDeque::pop_front)
        {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn to_api_error(error: ApplicationError) -> ApiError {
    let (status, body): (_, ErrorBody) = error_parts(&error);
    ApiError::from_response(status.as_u16(), Some(body))
}

#[async_trait]
impl WorkTimerApi for InProcessWorkTimerApi {
    async fn get_active(&self, ticket_id: &str) -> Result<Option<WorkTimerView>, ApiError> {
        self.enter(ApiCall::GetActive).await?;
        get_active_work_timer(&self.state, ticket_id)
            .await
            .map_err(to_api_error)
    }

    async fn start(
        &self,
        ticket_id: &str,
        description: Option<&str>,
    ) -> Result<WorkTimerView, ApiError> {
        self.enter(ApiCall::Start).await?;
        start_work_timer(
            &self.state,
            ticket_id,
            &self.user_id,
            description.map(String::from),
        )
        .await
        .map_err(to_api_error)
    }

    async fn pause(&self, timer_id: &str) -> Result<WorkTimerView, ApiError> {
        self.enter(ApiCall::Pause).await?;
        pause_work_timer(&self.state, timer_id)
            .await
            .map_err(to_api_error)
    }

    async fn resume(&self, timer_id: &str) -> Result<WorkTimerView, ApiError> {
        self.enter(ApiCall::Resume).await?;
        resume_work_timer(&self.state, timer_id)
            .await
            .map_err(to_api_error)
    }

    async fn stop(&self, timer_id: &str) -> Result<StopSummary, ApiError> {
        self.enter(ApiCall::Stop).await?;
        stop_work_timer(&self.state, timer_id)
            .await
            .map_err(to_api_error)
    }

    async fn list(&self, ticket_id: &str) -> Result<TicketWorkTimersResponse, ApiError> {
        self.enter(ApiCall::List).await?;
        list_ticket_work_timers(self.state.queries.as_ref(), ticket_id)
            .await
            .map(TicketWorkTimersResponse::from)
            .map_err(|error| to_api_error(ApplicationError::from(error)))
    }
}

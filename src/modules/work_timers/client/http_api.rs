// reqwest adapter for the work timer REST contract.

use crate::modules::work_timers::adapters::inbound::current_user::USER_ID_HEADER;
use crate::modules::work_timers::client::api::{ApiError, WorkTimerApi};
use crate::modules::work_timers::use_cases::list_ticket_work_timers::inbound::http::TicketWorkTimersResponse;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::{
    WorkTimerEnvelope, WorkTimerView,
};
use crate::modules::work_timers::use_cases::start_work_timer::inbound::http::StartWorkTimerBody;
use crate::modules::work_timers::use_cases::stop_work_timer::handler::StopSummary;
use crate::shell::config::AppConfig;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpWorkTimerApi {
    client: Client,
    base_url: String,
    user_id: String,
}

impl HttpWorkTimerApi {
    pub fn new(base_url: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, user_id)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_id: user_id.into(),
        }
    }

    pub fn from_config(config: &AppConfig, user_id: impl Into<String>) -> Self {
        Self::new(config.api_url.clone(), user_id)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .header(USER_ID_HEADER, &self.user_id)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            tracing::debug!(status = status.as_u16(), "work timer request rejected");
            Err(ApiError::from_response(
                status.as_u16(),
                serde_json::from_slice(&bytes).ok(),
            ))
        }
    }

    async fn send_timer(&self, request: RequestBuilder) -> Result<WorkTimerView, ApiError> {
        let envelope: WorkTimerEnvelope = self.send(request).await?;
        envelope
            .timer
            .ok_or_else(|| ApiError::Decode("response carried no timer".into()))
    }
}

#[async_trait]
impl WorkTimerApi for HttpWorkTimerApi {
    async fn get_active(&self, ticket_id: &str) -> Result<Option<WorkTimerView>, ApiError> {
        let request = self
            .client
            .get(self.url(&format!("/tickets/{ticket_id}/timer/active")));
        let envelope: WorkTimerEnvelope = self.send(request).await?;
        Ok(envelope.timer)
    }

    async fn start(
        &self,
        ticket_id: &str,
        description: Option<&str>,
    ) -> Result<WorkTimerView, ApiError> {
        let request = self
            .client
            .post(self.url(&format!("/tickets/{ticket_id}/timer/start")))
            .json(&StartWorkTimerBody {
                description: description.map(String::from),
            });
        self.send_timer(request).await
    }

    async fn pause(&self, timer_id: &str) -> Result<WorkTimerView, ApiError> {
        let request = self
            .client
            .put(self.url(&format!("/timers/{timer_id}/pause")));
        self.send_timer(request).await
    }

    async fn resume(&self, timer_id: &str) -> Result<WorkTimerView, ApiError> {
        let request = self
            .client
            .put(self.url(&format!("/timers/{timer_id}/resume")));
        self.send_timer(request).await
    }

    async fn stop(&self, timer_id: &str) -> Result<StopSummary, ApiError> {
        let request = self
            .client
            .put(self.url(&format!("/timers/{timer_id}/stop")));
        self.send(request).await
    }

    async fn list(&self, ticket_id: &str) -> Result<TicketWorkTimersResponse, ApiError> {
        let request = self
            .client
            .get(self.url(&format!("/tickets/{ticket_id}/timers")));
        self.send(request).await
    }
}

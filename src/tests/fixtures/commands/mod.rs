// Shared test fixture for the StartWorkTimer command.
// The canonical values live in json/start_work_timer.json.

use crate::modules::work_timers::use_cases::start_work_timer::command::StartWorkTimer;
use serde::Deserialize;

const START_WORK_TIMER_JSON: &str = include_str!("json/start_work_timer.json");

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct StartWorkTimerDto {
    pub timer_id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub description: Option<String>,
    pub started_at: i64,
}

pub struct StartWorkTimerBuilder {
    inner: StartWorkTimer,
}

impl StartWorkTimerBuilder {
    pub fn new() -> Self {
        let dto: StartWorkTimerDto = serde_json::from_str(START_WORK_TIMER_JSON).unwrap();
        Self {
            inner: StartWorkTimer {
                timer_id: dto.timer_id,
                ticket_id: dto.ticket_id,
                user_id: dto.user_id,
                description: dto.description,
                started_at: dto.started_at,
            },
        }
    }

    pub fn timer_id(mut self, v: impl Into<String>) -> Self {
        self.inner.timer_id = v.into();
        self
    }

    pub fn ticket_id(mut self, v: impl Into<String>) -> Self {
        self.inner.ticket_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn description(mut self, v: Option<&str>) -> Self {
        self.inner.description = v.map(String::from);
        self
    }

    pub fn started_at(mut self, v: i64) -> Self {
        self.inner.started_at = v;
        self
    }

    pub fn build(self) -> StartWorkTimer {
        self.inner
    }
}

impl Default for StartWorkTimerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Read model for work timers, and the wire shape served to clients.

use crate::modules::work_timers::core::elapsed::{ElapsedReading, TimerSnapshot, read_elapsed};
use crate::modules::work_timers::core::state::{PauseInterval, WorkTimer, WorkTimerStatus};
use crate::shared::core::primitives::{millis_to_whole_seconds, seconds_to_hours};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkTimerRow {
    pub timer_id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub status: WorkTimerStatus,
    pub description: Option<String>,
    pub start_time: i64,
    pub last_pause_start: Option<i64>,
    pub pauses: Vec<PauseInterval>,
    pub total_paused_ms: i64,
    pub stopped_at: Option<i64>,
    pub total_seconds: Option<i64>,
    pub total_hours: Option<f64>,
    pub auto_consumed: bool,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkTimerView {
    pub id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub status: WorkTimerStatus,
    pub start_time: i64,
    #[serde(default, alias = "pausedAt")]
    pub last_pause_start: Option<i64>,
    /// Whole seconds.
    pub total_paused_time: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pauses: Vec<PauseInterval>,
    #[serde(default)]
    pub stopped_at: Option<i64>,
    #[serde(default)]
    pub total_seconds: Option<i64>,
    #[serde(default)]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub auto_consumed: bool,
}

impl WorkTimerView {
    pub fn from_timer(timer: &WorkTimer, status: WorkTimerStatus) -> Self {
        Self {
            id: timer.timer_id.clone(),
            ticket_id: timer.ticket_id.clone(),
            user_id: timer.user_id.clone(),
            status,
            start_time: timer.start_time,
            last_pause_start: timer.last_pause_start,
            total_paused_time: timer.total_paused_seconds(),
            description: timer.description.clone(),
            pauses: timer.pauses.clone(),
            stopped_at: timer.stopped_at,
            total_seconds: timer.total_seconds,
            total_hours: timer.total_seconds.map(seconds_to_hours),
            auto_consumed: timer.auto_consumed,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            status: self.status,
            start_time: self.start_time,
            last_pause_start: self.last_pause_start,
            total_paused_seconds: self.total_paused_time,
        }
    }

    pub fn elapsed_at(&self, now_ms: i64) -> ElapsedReading {
        read_elapsed(&self.snapshot(), now_ms)
    }
}

/// `{ timer }` response body; `timer` is null when no timer is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkTimerEnvelope {
    pub timer: Option<WorkTimerView>,
}

impl From<WorkTimerRow> for WorkTimerView {
    fn from(row: WorkTimerRow) -> Self {
        Self {
            id: row.timer_id,
            ticket_id: row.ticket_id,
            user_id: row.user_id,
            status: row.status,
            start_time: row.start_time,
            last_pause_start: row.last_pause_start,
            total_paused_time: millis_to_whole_seconds(row.total_paused_ms),
            description: row.description,
            pauses: row.pauses,
            stopped_at: row.stopped_at,
            total_seconds: row.total_seconds,
            total_hours: row.total_hours,
            auto_consumed: row.auto_consumed,
        }
    }
}

// WorkTimerState is the state of the most recent timer of a ticket after folding its stream.
//
// Boundaries
// - No input or output. Framework-free apart from serde derives on value types.
//
// Notes
// - Pause accounting is a list of closed intervals; the total is always derived from it.

use crate::modules::work_timers::core::elapsed::TimerSnapshot;
use crate::shared::core::primitives::millis_to_whole_seconds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkTimerStatus {
    Running,
    Paused,
    Stopped,
}

impl WorkTimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkTimerStatus::Running => "running",
            WorkTimerStatus::Paused => "paused",
            WorkTimerStatus::Stopped => "stopped",
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, WorkTimerStatus::Stopped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PauseInterval {
    pub pause_start: i64,
    pub pause_end: i64,
}

impl PauseInterval {
    pub fn millis(&self) -> i64 {
        self.pause_end - self.pause_start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkTimer {
    pub timer_id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub description: Option<String>,
    pub start_time: i64,
    pub pauses: Vec<PauseInterval>,
    pub last_pause_start: Option<i64>,
    pub stopped_at: Option<i64>,
    pub total_seconds: Option<i64>,
    pub auto_consumed: bool,
}

impl WorkTimer {
    pub fn status(&self) -> WorkTimerStatus {
        match (self.stopped_at, self.last_pause_start) {
            (Some(_), _) => WorkTimerStatus::Stopped,
            (None, Some(_)) => WorkTimerStatus::Paused,
            (None, None) => WorkTimerStatus::Running,
        }
    }

    pub fn total_paused_millis(&self) -> i64 {
        self.pauses.iter().map(PauseInterval::millis).sum()
    }

    pub fn total_paused_seconds(&self) -> i64 {
        millis_to_whole_seconds(self.total_paused_millis())
    }

    /// Paused time up to `at`, counting a still-open pause.
    pub fn paused_millis_until(&self, at: i64) -> i64 {
        let open = self
            .last_pause_start
            .map(|since| (at - since).max(0))
            .unwrap_or(0);
        self.total_paused_millis() + open
    }

    /// Worked time up to `at`: wall time minus every pause.
    pub fn worked_millis_until(&self, at: i64) -> i64 {
        ((at - self.start_time) - self.paused_millis_until(at)).max(0)
    }

    pub fn snapshot(&self, status: WorkTimerStatus) -> TimerSnapshot {
        TimerSnapshot {
            status,
            start_time: self.start_time,
            last_pause_start: self.last_pause_start,
            total_paused_seconds: self.total_paused_seconds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkTimerState {
    None,
    Running(WorkTimer),
    Paused(WorkTimer),
    Stopped(WorkTimer),
}

impl WorkTimerState {
    pub fn timer(&self) -> Option<&WorkTimer> {
        match self {
            WorkTimerState::None => None,
            WorkTimerState::Running(timer)
            | WorkTimerState::Paused(timer)
            | WorkTimerState::Stopped(timer) => Some(timer),
        }
    }

    pub fn status(&self) -> Option<WorkTimerStatus> {
        match self {
            WorkTimerState::None => None,
            WorkTimerState::Running(_) => Some(WorkTimerStatus::Running),
            WorkTimerState::Paused(_) => Some(WorkTimerStatus::Paused),
            WorkTimerState::Stopped(_) => Some(WorkTimerStatus::Stopped),
        }
    }

    /// The running or paused timer, if any.
    pub fn active_timer(&self) -> Option<&WorkTimer> {
        match self {
            WorkTimerState::Running(timer) | WorkTimerState::Paused(timer) => Some(timer),
            _ => None,
        }
    }
}

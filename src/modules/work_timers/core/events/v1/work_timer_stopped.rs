// Event payload: WorkTimerStoppedV1.
//
// Final, terminal fact for a timer. `total_seconds` is the worked time
// (wall time minus every pause, including one still open at stop time).
// `auto_consumed` tells downstream consumers the hours go to the hour bank.

use crate::shared::core::primitives::seconds_to_hours;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct WorkTimerStoppedV1 {
    pub timer_id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub stopped_at: i64,
    pub open_pause_started_at: Option<i64>,
    pub total_seconds: i64,
    pub total_paused_seconds: i64,
    pub auto_consumed: bool,
}

impl WorkTimerStoppedV1 {
    pub fn total_hours(&self) -> f64 {
        seconds_to_hours(self.total_seconds)
    }
}

// Root event enumeration for the work timers of a ticket.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version and a new variant.
// - Do not change the meaning of historical events.

pub mod v1 {
    pub mod work_timer_paused;
    pub mod work_timer_resumed;
    pub mod work_timer_started;
    pub mod work_timer_stopped;
}

use v1::work_timer_paused::WorkTimerPausedV1;
use v1::work_timer_resumed::WorkTimerResumedV1;
use v1::work_timer_started::WorkTimerStartedV1;
use v1::work_timer_stopped::WorkTimerStoppedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum WorkTimerEvent {
    WorkTimerStartedV1(WorkTimerStartedV1),
    WorkTimerPausedV1(WorkTimerPausedV1),
    WorkTimerResumedV1(WorkTimerResumedV1),
    WorkTimerStoppedV1(WorkTimerStoppedV1),
}

impl WorkTimerEvent {
    pub fn timer_id(&self) -> &str {
        match self {
            WorkTimerEvent::WorkTimerStartedV1(e) => &e.timer_id,
            WorkTimerEvent::WorkTimerPausedV1(e) => &e.timer_id,
            WorkTimerEvent::WorkTimerResumedV1(e) => &e.timer_id,
            WorkTimerEvent::WorkTimerStoppedV1(e) => &e.timer_id,
        }
    }

    pub fn occurred_at(&self) -> i64 {
        match self {
            WorkTimerEvent::WorkTimerStartedV1(e) => e.started_at,
            WorkTimerEvent::WorkTimerPausedV1(e) => e.paused_at,
            WorkTimerEvent::WorkTimerResumedV1(e) => e.resumed_at,
            WorkTimerEvent::WorkTimerStoppedV1(e) => e.stopped_at,
        }
    }
}

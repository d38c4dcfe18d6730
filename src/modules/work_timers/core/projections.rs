use crate::modules::work_timers::core::events::WorkTimerEvent;
use crate::modules::work_timers::core::state::{PauseInterval, WorkTimerStatus};
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerRow;
use crate::shared::core::primitives::seconds_to_hours;

#[derive(Debug, Clone, PartialEq)]
pub enum WorkTimerPatch {
    Paused {
        paused_at: i64,
    },
    Resumed {
        interval: PauseInterval,
    },
    Stopped {
        stopped_at: i64,
        closing_pause: Option<PauseInterval>,
        total_seconds: i64,
        auto_consumed: bool,
    },
}

impl WorkTimerPatch {
    pub fn apply_to(&self, row: &mut WorkTimerRow) {
        match self {
            WorkTimerPatch::Paused { paused_at } => {
                row.status = WorkTimerStatus::Paused;
                row.last_pause_start = Some(*paused_at);
            }
            WorkTimerPatch::Resumed { interval } => {
                row.status = WorkTimerStatus::Running;
                row.last_pause_start = None;
                row.pauses.push(*interval);
                row.total_paused_ms += interval.millis();
            }
            WorkTimerPatch::Stopped {
                stopped_at,
                closing_pause,
                total_seconds,
                auto_consumed,
            } => {
                if let Some(interval) = closing_pause {
                    row.pauses.push(*interval);
                    row.total_paused_ms += interval.millis();
                }
                row.status = WorkTimerStatus::Stopped;
                row.last_pause_start = None;
                row.stopped_at = Some(*stopped_at);
                row.total_seconds = Some(*total_seconds);
                row.total_hours = Some(seconds_to_hours(*total_seconds));
                row.auto_consumed = *auto_consumed;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Upsert(WorkTimerRow),
    Patch {
        timer_id: String,
        patch: WorkTimerPatch,
        last_event_id: String,
    },
}

/// Translate one event into read model mutations. `last_event_id` is "stream_id:version".
pub fn apply(stream_id: &str, version: i64, event: &WorkTimerEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    let patch = |timer_id: &str, patch: WorkTimerPatch| Mutation::Patch {
        timer_id: timer_id.to_string(),
        patch,
        last_event_id: stream_key.clone(),
    };
    match event {
        WorkTimerEvent::WorkTimerStartedV1(e) => vec![Mutation::Upsert(WorkTimerRow {
            timer_id: e.timer_id.clone(),
            ticket_id: e.ticket_id.clone(),
            user_id: e.user_id.clone(),
            status: WorkTimerStatus::Running,
            description: e.description.clone(),
            start_time: e.started_at,
            last_pause_start: None,
            pauses: Vec::new(),
            total_paused_ms: 0,
            stopped_at: None,
            total_seconds: None,
            total_hours: None,
            auto_consumed: false,
            last_event_id: Some(stream_key.clone()),
        })],
        WorkTimerEvent::WorkTimerPausedV1(e) => vec![patch(
            &e.timer_id,
            WorkTimerPatch::Paused {
                paused_at: e.paused_at,
            },
        )],
        WorkTimerEvent::WorkTimerResumedV1(e) => vec![patch(
            &e.timer_id,
            WorkTimerPatch::Resumed {
                interval: PauseInterval {
                    pause_start: e.paused_at,
                    pause_end: e.resumed_at,
                },
            },
        )],
        WorkTimerEvent::WorkTimerStoppedV1(e) => vec![patch(
            &e.timer_id,
            WorkTimerPatch::Stopped {
                stopped_at: e.stopped_at,
                closing_pause: e.open_pause_started_at.map(|pause_start| PauseInterval {
                    pause_start,
                    pause_end: e.stopped_at,
                }),
                total_seconds: e.total_seconds,
                auto_consumed: e.auto_consumed,
            },
        )],
    }
}

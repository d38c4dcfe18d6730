use crate::modules::work_timers::core::events::WorkTimerEvent;
use crate::modules::work_timers::core::state::{PauseInterval, WorkTimer, WorkTimerState};

/// Deterministic transition for one event. Events that do not fit the
/// current state (wrong timer id, wrong lifecycle step) leave it unchanged.
pub fn evolve(state: WorkTimerState, event: WorkTimerEvent) -> WorkTimerState {
    match (state, event) {
        (WorkTimerState::None | WorkTimerState::Stopped(_), WorkTimerEvent::WorkTimerStartedV1(e)) => {
            WorkTimerState::Running(WorkTimer {
                timer_id: e.timer_id,
                ticket_id: e.ticket_id,
                user_id: e.user_id,
                description: e.description,
                start_time: e.started_at,
                pauses: Vec::new(),
                last_pause_start: None,
                stopped_at: None,
                total_seconds: None,
                auto_consumed: false,
            })
        }
        (WorkTimerState::Running(mut timer), WorkTimerEvent::WorkTimerPausedV1(e))
            if timer.timer_id == e.timer_id =>
        {
            timer.last_pause_start = Some(e.paused_at);
            WorkTimerState::Paused(timer)
        }
        (WorkTimerState::Paused(mut timer), WorkTimerEvent::WorkTimerResumedV1(e))
            if timer.timer_id == e.timer_id =>
        {
            timer.pauses.push(PauseInterval {
                pause_start: e.paused_at,
                pause_end: e.resumed_at,
            });
            timer.last_pause_start = None;
            WorkTimerState::Running(timer)
        }
        (
            WorkTimerState::Running(mut timer) | WorkTimerState::Paused(mut timer),
            WorkTimerEvent::WorkTimerStoppedV1(e),
        ) if timer.timer_id == e.timer_id => {
            if let Some(pause_start) = e.open_pause_started_at {
                timer.pauses.push(PauseInterval {
                    pause_start,
                    pause_end: e.stopped_at,
                });
            }
            timer.last_pause_start = None;
            timer.stopped_at = Some(e.stopped_at);
            timer.total_seconds = Some(e.total_seconds);
            timer.auto_consumed = e.auto_consumed;
            WorkTimerState::Stopped(timer)
        }
        (state, _) => state,
    }
}

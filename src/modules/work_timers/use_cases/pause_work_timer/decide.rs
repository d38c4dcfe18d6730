use crate::modules::work_timers::core::{
    decision::{DecideError, Decision},
    events::{WorkTimerEvent, v1::work_timer_paused::WorkTimerPausedV1},
    state::WorkTimerState,
};
use crate::modules::work_timers::use_cases::pause_work_timer::command::PauseWorkTimer;

/// The paused total is not touched here; the interval is closed on resume or stop.
pub fn decide_pause(state: &WorkTimerState, command: PauseWorkTimer) -> Decision {
    match state {
        WorkTimerState::Running(timer) if timer.timer_id == command.timer_id => {
            if command.paused_at < timer.start_time {
                return Decision::reject(DecideError::ClockSkew {
                    at: command.paused_at,
                    since: timer.start_time,
                });
            }
            Decision::accept(vec![WorkTimerEvent::WorkTimerPausedV1(WorkTimerPausedV1 {
                timer_id: command.timer_id,
                paused_at: command.paused_at,
            })])
        }
        WorkTimerState::Paused(timer) if timer.timer_id == command.timer_id => {
            Decision::reject(DecideError::TimerNotRunning)
        }
        _ => Decision::reject(DecideError::TimerNotActive),
    }
}

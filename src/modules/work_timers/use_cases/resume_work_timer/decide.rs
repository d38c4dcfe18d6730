use crate::modules::work_timers::core::{
    decision::{DecideError, Decision},
    events::{WorkTimerEvent, v1::work_timer_resumed::WorkTimerResumedV1},
    state::WorkTimerState,
};
use crate::modules::work_timers::use_cases::resume_work_timer::command::ResumeWorkTimer;

/// Closes the open pause; the interval becomes part of the paused total.
pub fn decide_resume(state: &WorkTimerState, command: ResumeWorkTimer) -> Decision {
    match state {
        WorkTimerState::Paused(timer) if timer.timer_id == command.timer_id => {
            let Some(paused_at) = timer.last_pause_start else {
                return Decision::reject(DecideError::TimerNotPaused);
            };
            if command.resumed_at < paused_at {
                return Decision::reject(DecideError::ClockSkew {
                    at: command.resumed_at,
                    since: paused_at,
                });
            }
            Decision::accept(vec![WorkTimerEvent::WorkTimerResumedV1(
                WorkTimerResumedV1 {
                    timer_id: command.timer_id,
                    paused_at,
                    resumed_at: command.resumed_at,
                },
            )])
        }
        WorkTimerState::Running(timer) if timer.timer_id == command.timer_id => {
            Decision::reject(DecideError::TimerNotPaused)
        }
        _ => Decision::reject(DecideError::TimerNotActive),
    }
}

use crate::modules::work_timers::core::{
    decision::{DecideError, Decision},
    events::{WorkTimerEvent, v1::work_timer_stopped::WorkTimerStoppedV1},
    intents::WorkTimerIntent,
    state::WorkTimerState,
};
use crate::modules::work_timers::use_cases::stop_work_timer::command::StopWorkTimer;
use crate::shared::core::primitives::millis_to_whole_seconds;

/// Final duration is wall time minus every pause; a pause still open at
/// stop time counts as paused up to the stop instant.
pub fn decide_stop(state: &WorkTimerState, command: StopWorkTimer) -> Decision {
    let timer = match state {
        WorkTimerState::Running(timer) | WorkTimerState::Paused(timer)
            if timer.timer_id == command.timer_id =>
        {
            timer
        }
        _ => return Decision::reject(DecideError::TimerNotActive),
    };
    let since = timer.last_pause_start.unwrap_or(timer.start_time);
    if command.stopped_at < since {
        return Decision::reject(DecideError::ClockSkew {
            at: command.stopped_at,
            since,
        });
    }

    let payload = WorkTimerStoppedV1 {
        timer_id: command.timer_id,
        ticket_id: timer.ticket_id.clone(),
        user_id: timer.user_id.clone(),
        stopped_at: command.stopped_at,
        open_pause_started_at: timer.last_pause_start,
        total_seconds: millis_to_whole_seconds(timer.worked_millis_until(command.stopped_at)),
        total_paused_seconds: millis_to_whole_seconds(
            timer.paused_millis_until(command.stopped_at),
        ),
        auto_consumed: command.auto_consume,
    };
    Decision::Accepted {
        events: vec![WorkTimerEvent::WorkTimerStoppedV1(payload.clone())],
        intents: vec![WorkTimerIntent::PublishWorkTimerStopped { payload }],
    }
}

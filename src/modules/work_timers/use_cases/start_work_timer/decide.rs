use crate::modules::work_timers::core::{
    decision::{DecideError, Decision},
    events::{WorkTimerEvent, v1::work_timer_started::WorkTimerStartedV1},
    state::WorkTimerState,
};
use crate::modules::work_timers::use_cases::start_work_timer::command::StartWorkTimer;

/// At most one running or paused timer per ticket.
pub fn decide_start(state: &WorkTimerState, command: StartWorkTimer) -> Decision {
    if let Some(active) = state.active_timer() {
        return Decision::reject(DecideError::ActiveTimerExists {
            timer: Box::new(active.clone()),
        });
    }
    Decision::accept(vec![WorkTimerEvent::WorkTimerStartedV1(WorkTimerStartedV1 {
        timer_id: command.timer_id,
        ticket_id: command.ticket_id,
        user_id: command.user_id,
        description: command
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        started_at: command.started_at,
    })])
}

// Canonical event instances, derived from the StartWorkTimer fixture.

use crate::modules::work_timers::core::events::v1::work_timer_started::WorkTimerStartedV1;
use crate::modules::work_timers::core::events::v1::work_timer_stopped::WorkTimerStoppedV1;
use crate::tests::fixtures::commands::StartWorkTimerBuilder;

pub fn make_started_event() -> WorkTimerStartedV1 {
    let command = StartWorkTimerBuilder::new().build();
    WorkTimerStartedV1 {
        timer_id: command.timer_id,
        ticket_id: command.ticket_id,
        user_id: command.user_id,
        description: command.description,
        started_at: command.started_at,
    }
}

/// One minute after `make_started_event`, never paused.
pub fn make_stopped_event() -> WorkTimerStoppedV1 {
    let started = make_started_event();
    WorkTimerStoppedV1 {
        timer_id: started.timer_id,
        ticket_id: started.ticket_id,
        user_id: started.user_id,
        stopped_at: started.started_at + 60_000,
        open_pause_started_at: None,
        total_seconds: 60,
        total_paused_seconds: 0,
        auto_consumed: false,
    }
}

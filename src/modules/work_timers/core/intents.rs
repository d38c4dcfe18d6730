use crate::modules::work_timers::core::events::v1::work_timer_stopped::WorkTimerStoppedV1;

/// Domain intents produced by the decider as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkTimerIntent {
    PublishWorkTimerStopped { payload: WorkTimerStoppedV1 },
}

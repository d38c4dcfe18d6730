use crate::modules::work_timers::adapters::outbound::hour_bank::InMemoryHourBank;
use crate::modules::work_timers::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::work_timers::adapters::outbound::ticket_gate::InMemoryTicketGate;
use crate::modules::work_timers::core::state::WorkTimer;
use crate::shared::core::primitives::ManualClock;
use crate::shell::state::{AppState, WorkTimerEventStore};
use crate::tests::fixtures::events::make_started_event;
use std::sync::Arc;

pub const TEST_TOPIC: &str = "work-timers";

/// Running timer matching `make_started_event`, without a description.
pub fn make_work_timer() -> WorkTimer {
    let started = make_started_event();
    WorkTimer {
        timer_id: started.timer_id,
        ticket_id: started.ticket_id,
        user_id: started.user_id,
        description: None,
        start_time: started.started_at,
        pauses: Vec::new(),
        last_pause_start: None,
        stopped_at: None,
        total_seconds: None,
        auto_consumed: false,
    }
}

pub struct TestState {
    pub app: AppState,
    pub clock: Arc<ManualClock>,
    pub tickets: Arc<InMemoryTicketGate>,
    pub hour_bank: Arc<InMemoryHourBank>,
}

fn build(event_store: WorkTimerEventStore, projections: InMemoryProjections) -> TestState {
    let clock = Arc::new(ManualClock::starting_at(0));
    let tickets = Arc::new(InMemoryTicketGate::new());
    let hour_bank = Arc::new(InMemoryHourBank::new());
    let app = AppState::new(
        TEST_TOPIC,
        Arc::new(event_store),
        Arc::new(projections),
        tickets.clone(),
        hour_bank.clone(),
        clock.clone(),
    );
    TestState {
        app,
        clock,
        tickets,
        hour_bank,
    }
}

/// In-memory state with the clock at epoch zero.
pub fn make_test_state() -> TestState {
    build(WorkTimerEventStore::new(), InMemoryProjections::new())
}

pub fn make_offline_test_state() -> TestState {
    let mut event_store = WorkTimerEventStore::new();
    event_store.toggle_offline();
    build(event_store, InMemoryProjections::new())
}

pub fn make_offline_projections_state() -> TestState {
    let mut projections = InMemoryProjections::new();
    projections.toggle_offline();
    build(WorkTimerEventStore::new(), projections)
}

use crate::modules::work_timers::adapters::outbound::hour_bank::{HourBank, InMemoryHourBank};
use crate::modules::work_timers::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::work_timers::adapters::outbound::ticket_gate::{InMemoryTicketGate, TicketGate};
use crate::modules::work_timers::application::command_handler::{
    CommandOutcome, WorkTimerCommandHandler,
};
use crate::modules::work_timers::application::errors::ApplicationError;
use crate::modules::work_timers::core::decision::Decision;
use crate::modules::work_timers::core::events::WorkTimerEvent;
use crate::modules::work_timers::core::state::WorkTimerState;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::handler::Projector;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::queries_port::WorkTimerQueries;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use std::sync::Arc;

pub type WorkTimerEventStore = InMemoryEventStore<WorkTimerEvent>;
pub type WorkTimerHandler = WorkTimerCommandHandler<WorkTimerEventStore, InMemoryDomainOutbox>;
pub type WorkTimerProjector = Projector<InMemoryProjections, InMemoryProjections>;

pub const PROJECTOR_NAME: &str = "work_timer_summary";

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn WorkTimerQueries + Send + Sync>,
    pub event_store: Arc<WorkTimerEventStore>,
    pub command_handler: Arc<WorkTimerHandler>,
    pub outbox: Arc<InMemoryDomainOutbox>,
    pub projector: Arc<WorkTimerProjector>,
    pub tickets: Arc<dyn TicketGate>,
    pub hour_bank: Arc<dyn HourBank>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        topic: &str,
        event_store: Arc<WorkTimerEventStore>,
        projections: Arc<InMemoryProjections>,
        tickets: Arc<dyn TicketGate>,
        hour_bank: Arc<dyn HourBank>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let projector = Arc::new(Projector::new(
            PROJECTOR_NAME,
            projections.clone(),
            projections.clone(),
        ));
        let command_handler = Arc::new(WorkTimerCommandHandler::new(
            topic,
            event_store.clone(),
            outbox.clone(),
        ));
        Self {
            queries: projections,
            event_store,
            command_handler,
            outbox,
            projector,
            tickets,
            hour_bank,
            clock,
        }
    }

    /// Every adapter in memory, no tickets registered, no hour banks.
    pub fn in_memory(topic: &str, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            topic,
            Arc::new(WorkTimerEventStore::new()),
            Arc::new(InMemoryProjections::new()),
            Arc::new(InMemoryTicketGate::new()),
            Arc::new(InMemoryHourBank::new()),
            clock,
        )
    }

    /// Owning ticket of a timer, from the read model.
    pub async fn ticket_of(&self, timer_id: &str) -> Result<String, ApplicationError> {
        self.queries
            .find_by_id(timer_id)
            .await?
            .map(|view| view.ticket_id)
            .ok_or_else(|| ApplicationError::NotFound(timer_id.to_string()))
    }

    /// Bring the read model up to the head of the stream, starting after
    /// the last event the projector recorded for it.
    pub async fn project(&self, stream_id: &str) -> Result<(), ApplicationError> {
        self.projector
            .catch_up(stream_id, &*self.event_store)
            .await?;
        Ok(())
    }

    /// Run a command, then project the stream whatever the command's result,
    /// so events appended before a later failure still reach the read model.
    pub async fn execute<F>(
        &self,
        stream_id: &str,
        decide: F,
    ) -> Result<CommandOutcome, ApplicationError>
    where
        F: Fn(&WorkTimerState) -> Decision,
    {
        let result = self.command_handler.handle_with_retry(stream_id, decide).await;
        match (result, self.project(stream_id).await) {
            (Ok(outcome), Ok(())) => Ok(outcome),
            (Ok(_), Err(projection)) => Err(projection),
            (Err(error), Ok(())) => Err(error),
            (Err(error), Err(projection)) => {
                tracing::warn!(stream_id, error = %projection, "read model catch-up failed");
                Err(error)
            }
        }
    }
}

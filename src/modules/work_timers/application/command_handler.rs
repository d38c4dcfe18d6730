// Load, fold, decide, append, dispatch.
//
// One handler serves every work timer command; the use case passes the
// decide step as a closure over its own command.

use crate::modules::work_timers::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::work_timers::application::errors::ApplicationError;
use crate::modules::work_timers::core::decision::Decision;
use crate::modules::work_timers::core::events::WorkTimerEvent;
use crate::modules::work_timers::core::evolve::evolve;
use crate::modules::work_timers::core::state::WorkTimerState;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

/// Every timer of a ticket lives in the same stream.
pub fn ticket_stream_id(ticket_id: &str) -> String {
    format!("TicketWorkTimers-{ticket_id}")
}

#[derive(Debug, Clone)]
pub struct CommandOutcome {
    /// State after the new events were folded in.
    pub state: WorkTimerState,
    /// Stream version before the append.
    pub starting_version: i64,
    pub events: Vec<WorkTimerEvent>,
}

impl CommandOutcome {
    pub fn timer_view(&self) -> Option<WorkTimerView> {
        self.state
            .timer()
            .map(|timer| WorkTimerView::from_timer(timer, timer.status()))
    }
}

pub struct WorkTimerCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<WorkTimerEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> WorkTimerCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<WorkTimerEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn load_state(&self, stream_id: &str) -> Result<WorkTimerState, ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        Ok(stream.events.into_iter().fold(WorkTimerState::None, evolve))
    }

    pub async fn handle<F>(
        &self,
        stream_id: &str,
        decide: F,
    ) -> Result<CommandOutcome, ApplicationError>
    where
        F: FnOnce(&WorkTimerState) -> Decision,
    {
        let stream = self
            .event_store
            .load(stream_id)
            .await
            .map_err(ApplicationError::VersionConflict)?;

        let state = stream
            .events
            .iter()
            .cloned()
            .fold(WorkTimerState::None, evolve);

        match decide(&state) {
            Decision::Accepted { events, intents } => {
                self.event_store
                    .append(stream_id, stream.version, &events)
                    .await
                    .map_err(ApplicationError::VersionConflict)?;
                dispatch_intents(
                    &*self.outbox,
                    stream_id,
                    stream.version,
                    &self.topic,
                    intents,
                )
                .await
                .map_err(ApplicationError::Outbox)?;
                let state = events.iter().cloned().fold(state, evolve);
                Ok(CommandOutcome {
                    state,
                    starting_version: stream.version,
                    events,
                })
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }

    /// Decide a second time when another writer moved the stream between
    /// load and append. A second mismatch is returned as is.
    pub async fn handle_with_retry<F>(
        &self,
        stream_id: &str,
        decide: F,
    ) -> Result<CommandOutcome, ApplicationError>
    where
        F: Fn(&WorkTimerState) -> Decision,
    {
        match self.handle(stream_id, &decide).await {
            Err(error) if error.is_version_mismatch() => {
                tracing::info!(stream_id, "stream moved during command, deciding again");
                self.handle(stream_id, &decide).await
            }
            other => other,
        }
    }
}

// Ticket eligibility collaborator. The ticket service owns tickets; this port
// only hands back the facts a timer depends on.

use crate::modules::work_timers::core::ticket::{
    TicketSnapshot, TimerIneligibility, check_timer_eligibility,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[async_trait]
pub trait TicketGate: Send + Sync {
    async fn snapshot(&self, ticket_id: &str) -> anyhow::Result<Option<TicketSnapshot>>;

    /// Unknown tickets are eligible.
    async fn eligibility(&self, ticket_id: &str) -> anyhow::Result<Result<(), TimerIneligibility>> {
        Ok(match self.snapshot(ticket_id).await? {
            Some(ticket) => check_timer_eligibility(&ticket),
            None => Ok(()),
        })
    }
}

#[derive(Default)]
pub struct InMemoryTicketGate {
    tickets: RwLock<HashMap<String, TicketSnapshot>>,
}

impl InMemoryTicketGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, ticket: TicketSnapshot) {
        self.tickets
            .write()
            .await
            .insert(ticket.ticket_id.clone(), ticket);
    }
}

#[async_trait]
impl TicketGate for InMemoryTicketGate {
    async fn snapshot(&self, ticket_id: &str) -> anyhow::Result<Option<TicketSnapshot>> {
        Ok(self.tickets.read().await.get(ticket_id).cloned())
    }
}

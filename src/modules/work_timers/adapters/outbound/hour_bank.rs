// Hour bank collaborator.
//
// Only answers whether logged time on a ticket is auto-consumed from a
// client's prepaid hours. Depletion happens downstream from the outbox row.

use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;

#[async_trait]
pub trait HourBank: Send + Sync {
    async fn covers(&self, ticket_id: &str) -> anyhow::Result<bool>;
}

#[derive(Default)]
pub struct InMemoryHourBank {
    covered_tickets: RwLock<HashSet<String>>,
    is_offline: bool,
}

impl InMemoryHourBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn cover(&self, ticket_id: impl Into<String>) {
        self.covered_tickets.write().await.insert(ticket_id.into());
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait]
impl HourBank for InMemoryHourBank {
    async fn covers(&self, ticket_id: &str) -> anyhow::Result<bool> {
        if self.is_offline {
            anyhow::bail!("Hour bank offline");
        }
        Ok(self.covered_tickets.read().await.contains(ticket_id))
    }
}

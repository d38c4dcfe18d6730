// Ticket facts the timer depends on. The ticket itself lives elsewhere;
// only assignee and status matter here.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Pending,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn accepts_tracked_time(&self) -> bool {
        !matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in progress",
            TicketStatus::Pending => "pending",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSnapshot {
    pub ticket_id: String,
    pub assignee_id: Option<String>,
    pub status: TicketStatus,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TimerIneligibility {
    #[error("the ticket must be assigned before time can be tracked")]
    Unassigned,

    #[error("the ticket is {0} and no longer accepts tracked time")]
    NotOpen(TicketStatus),
}

pub fn check_timer_eligibility(ticket: &TicketSnapshot) -> Result<(), TimerIneligibility> {
    if ticket
        .assignee_id
        .as_deref()
        .is_none_or(|assignee| assignee.trim().is_empty())
    {
        return Err(TimerIneligibility::Unassigned);
    }
    if !ticket.status.accepts_tracked_time() {
        return Err(TimerIneligibility::NotOpen(ticket.status));
    }
    Ok(())
}

use crate::modules::work_timers::core::ticket::{
    TicketSnapshot, TimerIneligibility, check_timer_eligibility,
};

/// Whether the start control is enabled, and why not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAvailability {
    Available,
    Unavailable { reason: String },
}

impl TimerAvailability {
    pub fn is_available(&self) -> bool {
        matches!(self, TimerAvailability::Available)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            TimerAvailability::Available => None,
            TimerAvailability::Unavailable { reason } => Some(reason),
        }
    }
}

pub fn timer_availability(ticket: &TicketSnapshot) -> TimerAvailability {
    match check_timer_eligibility(ticket) {
        Ok(()) => TimerAvailability::Available,
        Err(TimerIneligibility::Unassigned) => TimerAvailability::Unavailable {
            reason: "Assign the ticket to someone before tracking time".into(),
        },
        Err(TimerIneligibility::NotOpen(status)) => TimerAvailability::Unavailable {
            reason: format!("Time cannot be tracked on a {status} ticket"),
        },
    }
}

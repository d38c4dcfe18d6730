use crate::modules::work_timers::core::events::WorkTimerEvent;
use crate::modules::work_timers::core::intents::WorkTimerIntent;
use crate::modules::work_timers::core::state::WorkTimer;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("an active timer already exists for this ticket")]
    ActiveTimerExists { timer: Box<WorkTimer> },

    #[error("timer is not running")]
    TimerNotRunning,

    #[error("timer is not paused")]
    TimerNotPaused,

    #[error("timer is stopped or unknown")]
    TimerNotActive,

    #[error("instant {at} is before {since}")]
    ClockSkew { at: i64, since: i64 },
}

pub enum Decision {
    Accepted {
        events: Vec<WorkTimerEvent>,
        intents: Vec<WorkTimerIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    pub fn accept(events: Vec<WorkTimerEvent>) -> Self {
        Decision::Accepted {
            events,
            intents: Vec::new(),
        }
    }

    pub fn reject(reason: DecideError) -> Self {
        Decision::Rejected { reason }
    }
}

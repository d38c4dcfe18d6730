use crate::modules::work_timers::core::decision::DecideError;
use crate::modules::work_timers::core::ticket::TimerIneligibility;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::intent_outbox::OutboxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("domain rejected: {0}")]
    Domain(DecideError),

    #[error("ticket not eligible: {0}")]
    Ineligible(TimerIneligibility),

    #[error("work timer {0} not found")]
    NotFound(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ApplicationError {
    pub fn is_version_mismatch(&self) -> bool {
        matches!(
            self,
            ApplicationError::VersionConflict(EventStoreError::VersionMismatch { .. })
        )
    }
}

impl From<anyhow::Error> for ApplicationError {
    fn from(error: anyhow::Error) -> Self {
        ApplicationError::Unexpected(error.to_string())
    }
}

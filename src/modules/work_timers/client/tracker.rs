// Client-side controller for the timer of one ticket.
//
// Responsibilities
// - Mirror the server's view of the active timer and keep a ticking display value.
// - Recover from a conflicting active timer by stopping it and retrying start once.
// - Detect corrupted pause bookkeeping on load and auto-stop the timer.
//
// Boundaries
// - All server access goes through `WorkTimerApi`; all user feedback through `Notifier`.
// - Only one mutating request is in flight at a time.

use crate::modules::work_timers::client::api::{ApiError, WorkTimerApi};
use crate::modules::work_timers::client::availability::timer_availability;
use crate::modules::work_timers::client::notifier::Notifier;
use crate::modules::work_timers::client::ticker::Ticker;
use crate::modules::work_timers::core::elapsed::{
    CorruptionSignal, DEFAULT_CORRUPTION_THRESHOLD, Integrity, assess_integrity,
};
use crate::modules::work_timers::core::state::WorkTimerStatus;
use crate::modules::work_timers::core::ticket::TicketSnapshot;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::inbound::http::TicketWorkTimersResponse;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use crate::modules::work_timers::use_cases::stop_work_timer::handler::StopSummary;
use crate::shared::core::primitives::Clock;
use crate::shell::config::AppConfig;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use thiserror::Error;
use tokio::sync::Mutex;

pub const CORRUPTED_TIMER_NOTICE: &str =
    "The previous timer had inconsistent pause data and was stopped. Start a new timer to keep tracking.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerPolicy {
    pub corruption_threshold: f64,
}

impl Default for TrackerPolicy {
    fn default() -> Self {
        Self {
            corruption_threshold: DEFAULT_CORRUPTION_THRESHOLD,
        }
    }
}

impl From<&AppConfig> for TrackerPolicy {
    fn from(config: &AppConfig) -> Self {
        Self {
            corruption_threshold: config.corruption_threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("another timer request is still in flight")]
    RequestInFlight,

    #[error("no active timer")]
    NoActiveTimer,

    #[error("timer is not running")]
    NotRunning,

    #[error("timer is not paused")]
    NotPaused,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Idle,
    Active(WorkTimerView),
    /// The server-side timer was stopped because its bookkeeping was inconsistent.
    Recovered {
        stopped_timer_id: String,
        signal: CorruptionSignal,
    },
}

#[derive(Default)]
struct Local {
    timer: Option<WorkTimerView>,
    ticker: Option<Ticker>,
}

impl Local {
    fn stop_ticking(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct TimeTracker {
    ticket_id: String,
    api: Arc<dyn WorkTimerApi>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    policy: TrackerPolicy,
    local: Mutex<Local>,
    displayed: Arc<AtomicI64>,
    in_flight: AtomicBool,
}

impl TimeTracker {
    pub fn new(
        ticket_id: impl Into<String>,
        api: Arc<dyn WorkTimerApi>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        policy: TrackerPolicy,
    ) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            api,
            notifier,
            clock,
            policy,
            local: Mutex::new(Local::default()),
            displayed: Arc::new(AtomicI64::new(0)),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    /// Fetch the active timer and reconcile the display with it.
    pub async fn load(&self) -> Result<LoadOutcome, TrackerError> {
        let _guard = self.begin()?;
        let active = self
            .api
            .get_active(&self.ticket_id)
            .await
            .map_err(|error| self.fail(error, "Could not load the work timer"))?;

        let Some(timer) = active else {
            self.clear().await;
            return Ok(LoadOutcome::Idle);
        };

        let now = self.clock.now_ms();
        if let Integrity::Corrupted(signal) =
            assess_integrity(&timer.snapshot(), now, self.policy.corruption_threshold)
        {
            tracing::warn!(timer_id = %timer.id, ?signal, "corrupted work timer, stopping it");
            if let Err(error) = self.api.stop(&timer.id).await {
                tracing::warn!(timer_id = %timer.id, %error, "auto-stop of corrupted timer failed");
            }
            self.clear().await;
            self.notifier.info(CORRUPTED_TIMER_NOTICE);
            return Ok(LoadOutcome::Recovered {
                stopped_timer_id: timer.id,
                signal,
            });
        }

        let seconds = timer.elapsed_at(now).seconds();
        self.install(timer.clone(), seconds).await;
        Ok(LoadOutcome::Active(timer))
    }

    pub async fn start(&self, description: Option<&str>) -> Result<WorkTimerView, TrackerError> {
        let _guard = self.begin()?;
        let timer = match self.api.start(&self.ticket_id, description).await {
            Ok(timer) => timer,
            Err(ApiError::Conflict {
                timer: Some(conflicting),
                ..
            }) => self
                .recover_from_conflict(&conflicting, description)
                .await
                .map_err(|error| self.fail(error, "Could not start the timer"))?,
            Err(error) => return Err(self.fail(error, "Could not start the timer")),
        };
        self.install(timer.clone(), 0).await;
        self.notifier.success("Timer started");
        Ok(timer)
    }

    /// Stop the timer blocking the ticket, then retry start exactly once.
    async fn recover_from_conflict(
        &self,
        conflicting: &WorkTimerView,
        description: Option<&str>,
    ) -> Result<WorkTimerView, ApiError> {
        tracing::info!(
            ticket_id = %self.ticket_id,
            conflicting_timer_id = %conflicting.id,
            "active timer exists, stopping it before retrying start"
        );
        if let Err(error) = self.api.stop(&conflicting.id).await {
            tracing::warn!(conflicting_timer_id = %conflicting.id, %error, "stopping conflicting timer failed");
        }
        self.api.start(&self.ticket_id, description).await
    }

    pub async fn pause(&self) -> Result<WorkTimerView, TrackerError> {
        let _guard = self.begin()?;
        let timer_id = self.current_id(WorkTimerStatus::Running).await?;
        let timer = self
            .api
            .pause(&timer_id)
            .await
            .map_err(|error| self.fail(error, "Could not pause the timer"))?;

        let frozen = timer.elapsed_at(self.clock.now_ms()).seconds();
        let mut local = self.local.lock().await;
        local.stop_ticking();
        self.displayed.store(frozen, Ordering::SeqCst);
        local.timer = Some(timer.clone());
        Ok(timer)
    }

    /// Resume ticking from the frozen value.
    pub async fn resume(&self) -> Result<WorkTimerView, TrackerError> {
        let _guard = self.begin()?;
        let timer_id = self.current_id(WorkTimerStatus::Paused).await?;
        let timer = self
            .api
            .resume(&timer_id)
            .await
            .map_err(|error| self.fail(error, "Could not resume the timer"))?;

        let mut local = self.local.lock().await;
        local.ticker = Some(Ticker::start(self.displayed.clone()));
        local.timer = Some(timer.clone());
        Ok(timer)
    }

    pub async fn stop(&self) -> Result<StopSummary, TrackerError> {
        let _guard = self.begin()?;
        let timer_id = {
            let local = self.local.lock().await;
            match &local.timer {
                Some(timer) => timer.id.clone(),
                None => return Err(TrackerError::NoActiveTimer),
            }
        };
        let summary = self
            .api
            .stop(&timer_id)
            .await
            .map_err(|error| self.fail(error, "Could not stop the timer"))?;

        self.clear().await;
        self.notifier
            .success(&format!("Logged {:.2} hours", summary.total_hours));
        Ok(summary)
    }

    pub async fn history(&self) -> Result<TicketWorkTimersResponse, TrackerError> {
        self.api
            .list(&self.ticket_id)
            .await
            .map_err(|error| self.fail(error, "Could not load the timer history"))
    }

    /// Value currently shown to the user, in seconds.
    pub fn displayed_elapsed(&self) -> i64 {
        self.displayed.load(Ordering::SeqCst)
    }

    /// Elapsed seconds recomputed from the server's timestamps.
    pub async fn authoritative_elapsed(&self) -> Option<i64> {
        let local = self.local.lock().await;
        local
            .timer
            .as_ref()
            .map(|timer| timer.elapsed_at(self.clock.now_ms()).seconds())
    }

    pub async fn current_timer(&self) -> Option<WorkTimerView> {
        self.local.lock().await.timer.clone()
    }

    pub async fn is_ticking(&self) -> bool {
        self.local
            .lock()
            .await
            .ticker
            .as_ref()
            .is_some_and(Ticker::is_running)
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Start is offered when the ticket accepts time, nothing is active
    /// locally and no request is pending.
    pub async fn can_start(&self, ticket: &TicketSnapshot) -> bool {
        timer_availability(ticket).is_available()
            && !self.is_busy()
            && self.local.lock().await.timer.is_none()
    }

    /// Cancel the local tick without touching the server timer.
    pub async fn detach(&self) {
        self.local.lock().await.stop_ticking();
    }

    fn begin(&self) -> Result<InFlight<'_>, TrackerError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map(|_| InFlight(&self.in_flight))
            .map_err(|_| TrackerError::RequestInFlight)
    }

    async fn current_id(&self, expected: WorkTimerStatus) -> Result<String, TrackerError> {
        let local = self.local.lock().await;
        match &local.timer {
            None => Err(TrackerError::NoActiveTimer),
            Some(timer) if timer.status == expected => Ok(timer.id.clone()),
            Some(_) if expected == WorkTimerStatus::Running => Err(TrackerError::NotRunning),
            Some(_) => Err(TrackerError::NotPaused),
        }
    }

    async fn install(&self, timer: WorkTimerView, seconds: i64) {
        let mut local = self.local.lock().await;
        local.stop_ticking();
        self.displayed.store(seconds, Ordering::SeqCst);
        if timer.status == WorkTimerStatus::Running {
            local.ticker = Some(Ticker::start(self.displayed.clone()));
        }
        local.timer = Some(timer);
    }

    async fn clear(&self) {
        let mut local = self.local.lock().await;
        local.stop_ticking();
        local.timer = None;
        self.displayed.store(0, Ordering::SeqCst);
    }

    fn fail(&self, error: ApiError, fallback: &str) -> TrackerError {
        tracing::warn!(ticket_id = %self.ticket_id, %error, "work timer request failed");
        self.notifier.error(error.server_message().unwrap_or(fallback));
        TrackerError::Api(error)
    }
}

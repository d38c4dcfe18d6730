use crate::modules::work_timers::application::command_handler::ticket_stream_id;
use crate::modules::work_timers::application::errors::ApplicationError;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use crate::modules::work_timers::use_cases::start_work_timer::command::StartWorkTimer;
use crate::modules::work_timers::use_cases::start_work_timer::decide::decide_start;
use crate::shell::state::AppState;
use uuid::Uuid;

pub async fn start_work_timer(
    state: &AppState,
    ticket_id: &str,
    user_id: &str,
    description: Option<String>,
) -> Result<WorkTimerView, ApplicationError> {
    if let Err(reason) = state.tickets.eligibility(ticket_id).await? {
        tracing::info!(%ticket_id, %reason, "start refused");
        return Err(ApplicationError::Ineligible(reason));
    }

    let stream_id = ticket_stream_id(ticket_id);
    let command = StartWorkTimer {
        timer_id: Uuid::now_v7().to_string(),
        ticket_id: ticket_id.to_string(),
        user_id: user_id.to_string(),
        description,
        started_at: state.clock.now_ms(),
    };
    let outcome = state
        .execute(&stream_id, |current| decide_start(current, command.clone()))
        .await?;

    let view = outcome
        .timer_view()
        .ok_or_else(|| ApplicationError::Unexpected("started timer missing from state".into()))?;
    tracing::info!(timer_id = %view.id, %ticket_id, %user_id, "work timer started");
    Ok(view)
}

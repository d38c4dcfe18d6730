use crate::modules::work_timers::application::command_handler::ticket_stream_id;
use crate::modules::work_timers::application::errors::ApplicationError;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use crate::shell::state::AppState;

pub async fn get_active_work_timer(
    state: &AppState,
    ticket_id: &str,
) -> Result<Option<WorkTimerView>, ApplicationError> {
    if let Err(error) = state.project(&ticket_stream_id(ticket_id)).await {
        tracing::warn!(ticket_id, %error, "serving active timer without catch-up");
    }
    Ok(state.queries.active_for_ticket(ticket_id).await?)
}

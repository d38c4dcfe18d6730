use crate::modules::work_timers::application::command_handler::ticket_stream_id;
use crate::modules::work_timers::application::errors::ApplicationError;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use crate::modules::work_timers::use_cases::pause_work_timer::command::PauseWorkTimer;
use crate::modules::work_timers::use_cases::pause_work_timer::decide::decide_pause;
use crate::shell::state::AppState;

pub async fn pause_work_timer(
    state: &AppState,
    timer_id: &str,
) -> Result<WorkTimerView, ApplicationError> {
    let ticket_id = state.ticket_of(timer_id).await?;
    let stream_id = ticket_stream_id(&ticket_id);
    let command = PauseWorkTimer {
        timer_id: timer_id.to_string(),
        paused_at: state.clock.now_ms(),
    };
    let outcome = state
        .execute(&stream_id, |current| decide_pause(current, command.clone()))
        .await?;
    tracing::info!(%timer_id, %ticket_id, "work timer paused");
    outcome
        .timer_view()
        .ok_or_else(|| ApplicationError::Unexpected("paused timer missing from state".into()))
}

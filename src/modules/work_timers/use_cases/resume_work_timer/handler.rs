use crate::modules::work_timers::application::command_handler::ticket_stream_id;
use crate::modules::work_timers::application::errors::ApplicationError;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::projection::WorkTimerView;
use crate::modules::work_timers::use_cases::resume_work_timer::command::ResumeWorkTimer;
use crate::modules::work_timers::use_cases::resume_work_timer::decide::decide_resume;
use crate::shell::state::AppState;

pub async fn resume_work_timer(
    state: &AppState,
    timer_id: &str,
) -> Result<WorkTimerView, ApplicationError> {
    let ticket_id = state.ticket_of(timer_id).await?;
    let stream_id = ticket_stream_id(&ticket_id);
    let command = ResumeWorkTimer {
        timer_id: timer_id.to_string(),
        resumed_at: state.clock.now_ms(),
    };
    let outcome = state
        .execute(&stream_id, |current| decide_resume(current, command.clone()))
        .await?;
    let view = outcome
        .timer_view()
        .ok_or_else(|| ApplicationError::Unexpected("resumed timer missing from state".into()))?;
    tracing::info!(%timer_id, paused_seconds = view.total_paused_time, "work timer resumed");
    Ok(view)
}

use crate::modules::work_timers::application::command_handler::ticket_stream_id;
use crate::modules::work_timers::application::errors::ApplicationError;
use crate::modules::work_timers::core::state::WorkTimerState;
use crate::modules::work_timers::use_cases::stop_work_timer::command::StopWorkTimer;
use crate::modules::work_timers::use_cases::stop_work_timer::decide::decide_stop;
use crate::shared::core::primitives::seconds_to_hours;
use crate::shell::state::AppState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopSummary {
    pub total_hours: f64,
    #[serde(default)]
    pub total_seconds: i64,
    #[serde(default)]
    pub auto_consumed: bool,
}

pub async fn stop_work_timer(
    state: &AppState,
    timer_id: &str,
) -> Result<StopSummary, ApplicationError> {
    let ticket_id = state.ticket_of(timer_id).await?;
    let stream_id = ticket_stream_id(&ticket_id);
    let auto_consume = match state.hour_bank.covers(&ticket_id).await {
        Ok(covered) => covered,
        Err(error) => {
            tracing::warn!(%ticket_id, %error, "hour bank unavailable, stopping without auto-consume");
            false
        }
    };
    let command = StopWorkTimer {
        timer_id: timer_id.to_string(),
        stopped_at: state.clock.now_ms(),
        auto_consume,
    };
    let outcome = state
        .execute(&stream_id, |current| decide_stop(current, command.clone()))
        .await?;

    let WorkTimerState::Stopped(timer) = &outcome.state else {
        return Err(ApplicationError::Unexpected(
            "stopped timer missing from state".into(),
        ));
    };
    let total_seconds = timer.total_seconds.unwrap_or_default();
    let summary = StopSummary {
        total_hours: seconds_to_hours(total_seconds),
        total_seconds,
        auto_consumed: timer.auto_consumed,
    };
    tracing::info!(
        %timer_id,
        %ticket_id,
        total_seconds,
        auto_consumed = summary.auto_consumed,
        "work timer stopped"
    );
    Ok(summary)
}

#[cfg(test)]
mod stop_work_timer_handler_tests {
    use super::*;
    use crate::modules::work_timers::adapters::outbound::hour_bank::InMemoryHourBank;
    use crate::modules::work_timers::core::decision::DecideError;
    use crate::modules::work_timers::core::state::WorkTimerStatus;
    use crate::modules::work_timers::use_cases::pause_work_timer::handler::pause_work_timer;
    use crate::modules::work_timers::use_cases::start_work_timer::handler::start_work_timer;
    use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxRow};
    use crate::tests::fixtures::state::{TEST_TOPIC, TestState, make_test_state};
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    #[tokio::test]
    async fn it_should_log_the_worked_time_and_publish_it() {
        let TestState { app, clock, .. } = make_test_state();
        let started = start_work_timer(&app, "t-1", "u-1", None).await.unwrap();
        clock.advance_secs(5_400);

        let summary = stop_work_timer(&app, &started.id).await.unwrap();

        assert_eq!(
            summary,
            StopSummary {
                total_hours: 1.5,
                total_seconds: 5_400,
                auto_consumed: false,
            }
        );
        let rows = app.outbox.rows().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].event_type, "WorkTimerStopped");
        let view = app.queries.find_by_id(&started.id).await.unwrap().unwrap();
        assert_eq!(view.status, WorkTimerStatus::Stopped);
        assert_eq!(view.total_hours, Some(1.5));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_count_an_open_pause_as_paused_time() {
        let TestState { app, clock, .. } = make_test_state();
        let started = start_work_timer(&app, "t-1", "u-1", None).await.unwrap();
        clock.advance_secs(150);
        pause_work_timer(&app, &started.id).await.unwrap();
        clock.advance_secs(50);

        let summary = stop_work_timer(&app, &started.id).await.unwrap();
        assert_eq!(summary.total_seconds, 150);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_mark_covered_tickets_as_auto_consumed() {
        let TestState { app, clock, .. } = make_test_state();
        let bank = Arc::new(InMemoryHourBank::new());
        bank.cover("t-1").await;
        let app = crate::shell::state::AppState {
            hour_bank: bank,
            ..app
        };
        let started = start_work_timer(&app, "t-1", "u-1", None).await.unwrap();
        clock.advance_secs(60);

        let summary = stop_work_timer(&app, &started.id).await.unwrap();
        assert!(summary.auto_consumed);
        assert_eq!(app.outbox.rows().await[0].payload["auto_consumed"], true);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_still_stop_while_the_hour_bank_is_down() {
        let TestState { app, clock, .. } = make_test_state();
        let mut bank = InMemoryHourBank::new();
        bank.cover("t-1").await;
        bank.toggle_offline();
        let app = crate::shell::state::AppState {
            hour_bank: Arc::new(bank),
            ..app
        };
        let started = start_work_timer(&app, "t-1", "u-1", None).await.unwrap();
        clock.advance_secs(60);

        let summary = stop_work_timer(&app, &started.id).await.unwrap();

        assert!(!summary.auto_consumed);
        assert_eq!(summary.total_seconds, 60);
        assert_eq!(app.outbox.rows().await[0].payload["auto_consumed"], false);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_project_the_stop_even_when_the_outbox_rejects_it() {
        let TestState { app, clock, .. } = make_test_state();
        let started = start_work_timer(&app, "t-1", "u-1", None).await.unwrap();
        app.outbox
            .enqueue(OutboxRow {
                topic: TEST_TOPIC.to_string(),
                event_type: "WorkTimerStopped".to_string(),
                event_version: 1,
                stream_id: ticket_stream_id("t-1"),
                stream_version: 2,
                occurred_at: 0,
                payload: serde_json::json!({}),
            })
            .await
            .unwrap();
        clock.advance_secs(60);

        let first = stop_work_timer(&app, &started.id).await;

        assert!(matches!(first, Err(ApplicationError::Outbox(_))));
        let view = app.queries.find_by_id(&started.id).await.unwrap().unwrap();
        assert_eq!(view.status, WorkTimerStatus::Stopped);
        assert_eq!(view.total_seconds, Some(60));
        assert_eq!(app.queries.active_for_ticket("t-1").await.unwrap(), None);
        assert!(matches!(
            stop_work_timer(&app, &started.id).await,
            Err(ApplicationError::Domain(DecideError::TimerNotActive))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_to_stop_a_stopped_timer() {
        let TestState { app, .. } = make_test_state();
        let started = start_work_timer(&app, "t-1", "u-1", None).await.unwrap();
        stop_work_timer(&app, &started.id).await.unwrap();
        let result = stop_work_timer(&app, &started.id).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::TimerNotActive))
        ));
    }
}

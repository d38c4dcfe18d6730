use crate::modules::work_timers::application::command_handler::ticket_stream_id;
use crate::modules::work_timers::core::state::{WorkTimerState, WorkTimerStatus};
use crate::modules::work_timers::use_cases::get_active_work_timer::handler::get_active_work_timer;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::handler::list_ticket_work_timers;
use crate::modules::work_timers::use_cases::pause_work_timer::handler::pause_work_timer;
use crate::modules::work_timers::use_cases::resume_work_timer::handler::resume_work_timer;
use crate::modules::work_timers::use_cases::start_work_timer::handler::start_work_timer;
use crate::modules::work_timers::use_cases::stop_work_timer::handler::stop_work_timer;
use crate::shared::core::primitives::Clock;
use crate::tests::fixtures::state::{TestState, make_test_state};

#[tokio::test]
async fn pause_resume_stop_accounts_for_paused_time() {
    let TestState { app, clock, .. } = make_test_state();

    let started = start_work_timer(&app, "t-1", "u-1", None).await.unwrap();
    assert_eq!(started.start_time, 0);

    clock.advance_secs(100);
    let paused = pause_work_timer(&app, &started.id).await.unwrap();
    assert_eq!(paused.status, WorkTimerStatus::Paused);
    assert_eq!(paused.last_pause_start, Some(100_000));
    assert_eq!(paused.elapsed_at(clock.now_ms()).seconds(), 100);

    clock.advance_secs(20);
    assert_eq!(paused.elapsed_at(clock.now_ms()).seconds(), 100);

    clock.advance_secs(10);
    let resumed = resume_work_timer(&app, &started.id).await.unwrap();
    assert_eq!(resumed.status, WorkTimerStatus::Running);
    assert_eq!(resumed.last_pause_start, None);
    assert_eq!(resumed.total_paused_time, 30);

    clock.advance_secs(70);
    let summary = stop_work_timer(&app, &started.id).await.unwrap();
    assert_eq!(summary.total_seconds, 170);
    assert_eq!(summary.total_hours, 0.05);

    assert_eq!(get_active_work_timer(&app, "t-1").await.unwrap(), None);
    let history = list_ticket_work_timers(app.queries.as_ref(), "t-1")
        .await
        .unwrap();
    assert_eq!(history.timers.len(), 1);
    assert_eq!(history.timers[0].status, WorkTimerStatus::Stopped);
    assert_eq!(history.timers[0].total_paused_time, 30);
    assert_eq!(history.timers[0].pauses.len(), 1);
}

#[tokio::test]
async fn reload_reads_the_full_span_of_an_unpaused_timer() {
    let TestState { app, clock, .. } = make_test_state();
    start_work_timer(&app, "t-1", "u-1", None).await.unwrap();

    clock.advance_secs(500);
    let reloaded = get_active_work_timer(&app, "t-1").await.unwrap().unwrap();

    assert_eq!(reloaded.elapsed_at(clock.now_ms()).seconds(), 500);
}

#[tokio::test]
async fn start_and_stop_without_pausing_logs_the_wall_time() {
    let TestState { app, clock, .. } = make_test_state();
    let started = start_work_timer(&app, "t-1", "u-1", Some("deploy".into()))
        .await
        .unwrap();

    clock.advance_secs(3_600);
    let summary = stop_work_timer(&app, &started.id).await.unwrap();

    assert_eq!(summary.total_seconds, 3_600);
    assert_eq!(summary.total_hours, 1.0);
    let rows = app.outbox.rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].event_type, "WorkTimerStopped");
}

#[tokio::test]
async fn a_second_pause_is_rejected_and_keeps_the_first_pause_start() {
    let TestState { app, clock, .. } = make_test_state();
    let started = start_work_timer(&app, "t-1", "u-1", None).await.unwrap();
    clock.advance_secs(10);
    pause_work_timer(&app, &started.id).await.unwrap();

    clock.advance_secs(10);
    assert!(pause_work_timer(&app, &started.id).await.is_err());

    let active = get_active_work_timer(&app, "t-1").await.unwrap().unwrap();
    assert_eq!(active.last_pause_start, Some(10_000));
}

#[tokio::test]
async fn a_stopped_timer_accepts_no_further_commands() {
    let TestState { app, clock, .. } = make_test_state();
    let started = start_work_timer(&app, "t-1", "u-1", None).await.unwrap();
    clock.advance_secs(60);
    stop_work_timer(&app, &started.id).await.unwrap();

    assert!(pause_work_timer(&app, &started.id).await.is_err());
    assert!(resume_work_timer(&app, &started.id).await.is_err());
    assert!(stop_work_timer(&app, &started.id).await.is_err());

    let state = app
        .command_handler
        .load_state(&ticket_stream_id("t-1"))
        .await
        .unwrap();
    assert!(matches!(state, WorkTimerState::Stopped(_)));
    assert_eq!(app.outbox.rows().await.len(), 1);
}

#[tokio::test]
async fn stopping_while_paused_closes_the_open_pause() {
    let TestState { app, clock, .. } = make_test_state();
    let started = start_work_timer(&app, "t-1", "u-1", None).await.unwrap();
    clock.advance_secs(150);
    pause_work_timer(&app, &started.id).await.unwrap();
    clock.advance_secs(50);

    let summary = stop_work_timer(&app, &started.id).await.unwrap();

    assert_eq!(summary.total_seconds, 150);
    let history = list_ticket_work_timers(app.queries.as_ref(), "t-1")
        .await
        .unwrap();
    assert_eq!(history.timers[0].total_paused_time, 50);
    assert_eq!(history.timers[0].last_pause_start, None);
}

#[tokio::test]
async fn a_new_timer_can_start_after_the_previous_one_stopped() {
    let TestState { app, clock, .. } = make_test_state();
    let first = start_work_timer(&app, "t-1", "u-1", None).await.unwrap();
    clock.advance_secs(1_800);
    stop_work_timer(&app, &first.id).await.unwrap();

    clock.advance_secs(60);
    let second = start_work_timer(&app, "t-1", "u-1", None).await.unwrap();
    clock.advance_secs(1_800);
    stop_work_timer(&app, &second.id).await.unwrap();

    let history = list_ticket_work_timers(app.queries.as_ref(), "t-1")
        .await
        .unwrap();
    assert_eq!(history.timers.len(), 2);
    assert_eq!(history.timers[0].id, second.id);
    assert_eq!(history.total_hours, 1.0);
}

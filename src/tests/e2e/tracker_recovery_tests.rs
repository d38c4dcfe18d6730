use crate::modules::work_timers::client::api::ApiError;
use crate::modules::work_timers::client::notifier::NoticeLevel;
use crate::modules::work_timers::client::tracker::{
    CORRUPTED_TIMER_NOTICE, LoadOutcome, TimeTracker, TrackerError, TrackerPolicy,
};
use crate::modules::work_timers::core::elapsed::CorruptionSignal;
use crate::modules::work_timers::core::state::WorkTimerStatus;
use crate::modules::work_timers::use_cases::get_active_work_timer::handler::get_active_work_timer;
use crate::modules::work_timers::use_cases::list_ticket_work_timers::handler::list_ticket_work_timers;
use crate::modules::work_timers::use_cases::pause_work_timer::handler::pause_work_timer;
use crate::modules::work_timers::use_cases::resume_work_timer::handler::resume_work_timer;
use crate::modules::work_timers::use_cases::start_work_timer::handler::start_work_timer;
use crate::tests::fixtures::api::{ApiCall, InProcessWorkTimerApi};
use crate::tests::fixtures::notifier::RecordingNotifier;
use crate::tests::fixtures::state::{TestState, make_test_state};
use std::sync::Arc;

struct Session {
    tracker: TimeTracker,
    api: Arc<InProcessWorkTimerApi>,
    notifier: Arc<RecordingNotifier>,
}

fn session(test: &TestState, user_id: &str, policy: TrackerPolicy) -> Session {
    let api = Arc::new(InProcessWorkTimerApi::new(test.app.clone(), user_id));
    let notifier = Arc::new(RecordingNotifier::default());
    let tracker = TimeTracker::new(
        "t-1",
        api.clone(),
        notifier.clone(),
        test.clock.clone(),
        policy,
    );
    Session {
        tracker,
        api,
        notifier,
    }
}

async fn active_count(test: &TestState) -> usize {
    list_ticket_work_timers(test.app.queries.as_ref(), "t-1")
        .await
        .unwrap()
        .timers
        .iter()
        .filter(|timer| timer.is_active())
        .count()
}

#[tokio::test(start_paused = true)]
async fn start_over_a_foreign_active_timer_stops_it_and_retries_once() {
    let test = make_test_state();
    let blocking = start_work_timer(&test.app, "t-1", "u-other", None)
        .await
        .unwrap();
    test.clock.advance_secs(300);
    let s = session(&test, "u-1", TrackerPolicy::default());

    let timer = s.tracker.start(Some("pairing")).await.unwrap();

    assert_ne!(timer.id, blocking.id);
    assert_eq!(timer.user_id, "u-1");
    assert_eq!(
        s.api.calls().await,
        vec![ApiCall::Start, ApiCall::Stop, ApiCall::Start]
    );
    assert_eq!(active_count(&test).await, 1);
    let history = list_ticket_work_timers(test.app.queries.as_ref(), "t-1")
        .await
        .unwrap();
    let stopped = history
        .timers
        .iter()
        .find(|listed| listed.id == blocking.id)
        .unwrap();
    assert_eq!(stopped.total_seconds, Some(300));
    assert_eq!(s.notifier.count(NoticeLevel::Error), 0);
}

#[tokio::test(start_paused = true)]
async fn a_stale_session_takes_over_and_the_other_session_reloads_it() {
    let test = make_test_state();
    let first = session(&test, "u-1", TrackerPolicy::default());
    let second = session(&test, "u-1", TrackerPolicy::default());

    let original = first.tracker.start(None).await.unwrap();
    test.clock.advance_secs(30);
    let replacement = second.tracker.start(None).await.unwrap();

    assert_eq!(active_count(&test).await, 1);
    match first.tracker.load().await.unwrap() {
        LoadOutcome::Active(timer) => {
            assert_eq!(timer.id, replacement.id);
            assert_ne!(timer.id, original.id);
        }
        other => panic!("expected Active, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn recovery_gives_up_after_a_single_retry() {
    let test = make_test_state();
    let blocking = start_work_timer(&test.app, "t-1", "u-other", None)
        .await
        .unwrap();
    let s = session(&test, "u-1", TrackerPolicy::default());
    s.api
        .fail_next(ApiCall::Stop, ApiError::Transport("connection refused".into()))
        .await;

    let result = s.tracker.start(None).await;

    assert!(matches!(
        result,
        Err(TrackerError::Api(ApiError::Conflict { .. }))
    ));
    assert_eq!(s.api.count(ApiCall::Start).await, 2);
    assert_eq!(s.api.count(ApiCall::Stop).await, 1);
    assert_eq!(s.notifier.count(NoticeLevel::Error), 1);
    assert_eq!(s.tracker.current_timer().await, None);
    let still_active = get_active_work_timer(&test.app, "t-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(still_active.id, blocking.id);
}

#[tokio::test(start_paused = true)]
async fn load_auto_stops_a_timer_whose_paused_share_is_implausible() {
    let test = make_test_state();
    let timer = start_work_timer(&test.app, "t-1", "u-1", None).await.unwrap();
    test.clock.advance_secs(100);
    pause_work_timer(&test.app, &timer.id).await.unwrap();
    test.clock.advance_secs(600);
    resume_work_timer(&test.app, &timer.id).await.unwrap();
    test.clock.advance_secs(300);
    let s = session(&test, "u-1", TrackerPolicy::default());

    let outcome = s.tracker.load().await.unwrap();

    assert_eq!(
        outcome,
        LoadOutcome::Recovered {
            stopped_timer_id: timer.id.clone(),
            signal: CorruptionSignal::PausedRatioExceeded {
                paused_seconds: 600,
                raw_seconds: 1_000,
                threshold: 0.5,
            },
        }
    );
    assert_eq!(s.tracker.current_timer().await, None);
    assert_eq!(s.tracker.displayed_elapsed(), 0);
    assert_eq!(
        s.notifier.last(),
        Some((NoticeLevel::Info, CORRUPTED_TIMER_NOTICE.to_string()))
    );
    assert_eq!(get_active_work_timer(&test.app, "t-1").await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn a_looser_threshold_keeps_the_same_timer_running() {
    let test = make_test_state();
    let timer = start_work_timer(&test.app, "t-1", "u-1", None).await.unwrap();
    test.clock.advance_secs(100);
    pause_work_timer(&test.app, &timer.id).await.unwrap();
    test.clock.advance_secs(600);
    resume_work_timer(&test.app, &timer.id).await.unwrap();
    test.clock.advance_secs(300);
    let s = session(
        &test,
        "u-1",
        TrackerPolicy {
            corruption_threshold: 0.75,
        },
    );

    let outcome = s.tracker.load().await.unwrap();

    assert!(matches!(outcome, LoadOutcome::Active(ref view) if view.id == timer.id));
    assert_eq!(s.tracker.displayed_elapsed(), 400);
}

#[tokio::test(start_paused = true)]
async fn reload_resumes_ticking_from_the_server_reading() {
    let test = make_test_state();
    start_work_timer(&test.app, "t-1", "u-1", None).await.unwrap();
    test.clock.advance_secs(500);
    let s = session(&test, "u-1", TrackerPolicy::default());

    s.tracker.load().await.unwrap();
    assert_eq!(s.tracker.displayed_elapsed(), 500);
    assert!(s.tracker.is_ticking().await);

    tokio::time::sleep(std::time::Duration::from_millis(2_500)).await;
    assert_eq!(s.tracker.displayed_elapsed(), 502);
}

#[tokio::test(start_paused = true)]
async fn reload_of_a_paused_timer_shows_the_frozen_value() {
    let test = make_test_state();
    let timer = start_work_timer(&test.app, "t-1", "u-1", None).await.unwrap();
    test.clock.advance_secs(100);
    pause_work_timer(&test.app, &timer.id).await.unwrap();
    test.clock.advance_secs(40);
    let s = session(&test, "u-1", TrackerPolicy::default());

    match s.tracker.load().await.unwrap() {
        LoadOutcome::Active(view) => assert_eq!(view.status, WorkTimerStatus::Paused),
        other => panic!("expected Active, got {other:?}"),
    }
    assert_eq!(s.tracker.displayed_elapsed(), 100);
    assert!(!s.tracker.is_ticking().await);

    s.tracker.resume().await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(1_500)).await;
    assert_eq!(s.tracker.displayed_elapsed(), 101);
}

#[tokio::test(start_paused = true)]
async fn load_of_an_idle_ticket_clears_the_view() {
    let test = make_test_state();
    let s = session(&test, "u-1", TrackerPolicy::default());

    assert_eq!(s.tracker.load().await.unwrap(), LoadOutcome::Idle);
    assert_eq!(s.tracker.current_timer().await, None);
    assert!(s.notifier.notices().is_empty());
}

// Shared primitives used by every module.
//
// Timestamps
// - All i64 instants are epoch milliseconds.
// - Durations exposed on the wire are whole seconds.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

pub type EpochMillis = i64;

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Source of the current instant. Injected everywhere a decision depends on "now".
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> EpochMillis;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> EpochMillis {
        Utc::now().timestamp_millis()
    }
}

/// Clock that only moves when told to. Used for simulated timelines.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn starting_at(now_ms: EpochMillis) -> Self {
        Self {
            now: AtomicI64::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: EpochMillis) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance_secs(&self, seconds: i64) {
        self.now
            .fetch_add(seconds * MILLIS_PER_SECOND, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> EpochMillis {
        self.now.load(Ordering::SeqCst)
    }
}

pub fn millis_to_whole_seconds(millis: i64) -> i64 {
    millis.div_euclid(MILLIS_PER_SECOND)
}

/// Hours rounded to two decimals, the granularity used for logged work.
pub fn seconds_to_hours(seconds: i64) -> f64 {
    let hours = seconds as f64 / SECONDS_PER_HOUR as f64;
    (hours * 100.0).round() / 100.0
}

// Elapsed-time reading and bookkeeping validation for a timer.
//
// rawElapsed = now - startTime
// elapsed    = rawElapsed - totalPausedTime                      while running
// elapsed    = (lastPauseStart - startTime) - totalPausedTime     while paused
// elapsed is floored at zero for display; a negative unclamped value, or a
// paused total above `threshold * rawElapsed`, marks the record as corrupted.

use crate::modules::work_timers::core::state::WorkTimerStatus;
use crate::shared::core::primitives::millis_to_whole_seconds;

/// Paused share of raw elapsed time above which a timer is considered corrupted.
pub const DEFAULT_CORRUPTION_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub status: WorkTimerStatus,
    pub start_time: i64,
    pub last_pause_start: Option<i64>,
    pub total_paused_seconds: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedReading {
    pub raw_seconds: i64,
    pub paused_seconds: i64,
    pub unclamped_seconds: i64,
}

impl ElapsedReading {
    pub fn seconds(&self) -> i64 {
        self.unclamped_seconds.max(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CorruptionSignal {
    NegativeElapsed {
        unclamped_seconds: i64,
    },
    PausedRatioExceeded {
        paused_seconds: i64,
        raw_seconds: i64,
        threshold: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Integrity {
    Healthy,
    Corrupted(CorruptionSignal),
}

impl Integrity {
    pub fn is_corrupted(&self) -> bool {
        matches!(self, Integrity::Corrupted(_))
    }
}

pub fn read_elapsed(snapshot: &TimerSnapshot, now_ms: i64) -> ElapsedReading {
    let raw_seconds = millis_to_whole_seconds(now_ms - snapshot.start_time);
    let reference = match snapshot.status {
        WorkTimerStatus::Paused => snapshot.last_pause_start.unwrap_or(now_ms),
        WorkTimerStatus::Running | WorkTimerStatus::Stopped => now_ms,
    };
    let counted = millis_to_whole_seconds(reference - snapshot.start_time);
    ElapsedReading {
        raw_seconds,
        paused_seconds: snapshot.total_paused_seconds,
        unclamped_seconds: counted - snapshot.total_paused_seconds,
    }
}

pub fn assess_integrity(snapshot: &TimerSnapshot, now_ms: i64, threshold: f64) -> Integrity {
    let reading = read_elapsed(snapshot, now_ms);
    if reading.unclamped_seconds < 0 {
        return Integrity::Corrupted(CorruptionSignal::NegativeElapsed {
            unclamped_seconds: reading.unclamped_seconds,
        });
    }
    if reading.paused_seconds as f64 > threshold * reading.raw_seconds as f64 {
        return Integrity::Corrupted(CorruptionSignal::PausedRatioExceeded {
            paused_seconds: reading.paused_seconds,
            raw_seconds: reading.raw_seconds,
            threshold,
        });
    }
    Integrity::Healthy
}

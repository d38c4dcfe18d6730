// Event payload: WorkTimerResumedV1.
//
// Carries the completed pause interval so that replay never depends on
// a running counter.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct WorkTimerResumedV1 {
    pub timer_id: String,
    pub paused_at: i64,
    pub resumed_at: i64,
}

impl WorkTimerResumedV1 {
    pub fn paused_millis(&self) -> i64 {
        self.resumed_at - self.paused_at
    }
}

// Event payload: WorkTimerPausedV1.
//
// The pause is open until a WorkTimerResumedV1 or WorkTimerStoppedV1 closes it.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct WorkTimerPausedV1 {
    pub timer_id: String,
    pub paused_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseWorkTimer {
    pub timer_id: String,
    pub paused_at: i64,
}

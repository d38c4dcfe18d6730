#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeWorkTimer {
    pub timer_id: String,
    pub resumed_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWorkTimer {
    pub timer_id: String,
    pub stopped_at: i64,
    pub auto_consume: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartWorkTimer {
    pub timer_id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub description: Option<String>,
    pub started_at: i64,
}

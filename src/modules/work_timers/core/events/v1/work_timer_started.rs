// Event payload: WorkTimerStartedV1.
//
// Records that a user started tracking work on a ticket.
// Timestamps are epoch milliseconds.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct WorkTimerStartedV1 {
    pub timer_id: String,
    pub ticket_id: String,
    pub user_id: String,
    pub description: Option<String>,
    pub started_at: i64,
}

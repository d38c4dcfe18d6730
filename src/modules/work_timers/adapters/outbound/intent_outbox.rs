use crate::modules::work_timers::core::intents::WorkTimerIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

/// Translate domain intents into outbox rows and enqueue them.
/// `starting_version` is the stream version before the append; intent `i`
/// belongs to version `starting_version + i + 1`.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<WorkTimerIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        match intent {
            WorkTimerIntent::PublishWorkTimerStopped { payload } => {
                let occurred_at = payload.stopped_at;
                let payload = serde_json::to_value(payload)
                    .map_err(|e| OutboxError::Validation(e.to_string()))?;
                outbox
                    .enqueue(OutboxRow {
                        topic: topic.to_string(),
                        event_type: "WorkTimerStopped".to_string(),
                        event_version: 1,
                        stream_id: stream_id.to_string(),
                        stream_version,
                        occurred_at,
                        payload,
                    })
                    .await?;
            }
        }
    }
    Ok(())
}

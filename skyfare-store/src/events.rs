use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize)]
pub struct RecordedEvent {
    pub topic: String,
    pub payload: serde_json::Value,
    pub recorded_at: DateTime<Utc>,
}

/// In-process event sink. Domain events are traced and kept in a bounded
/// buffer for the admin activity view; there is no external broker.
pub struct EventLog {
    entries: RwLock<Vec<RecordedEvent>>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            capacity,
        }
    }

    pub async fn publish<T: Serialize>(&self, topic: &str, event: &T) -> Result<(), serde_json::Error> {
        let payload = serde_json::to_value(event)?;
        tracing::info!(topic, %payload, "domain event");

        let mut entries = self.entries.write().await;
        entries.push(RecordedEvent {
            topic: topic.to_string(),
            payload,
            recorded_at: Utc::now(),
        });
        let len = entries.len();
        if len > self.capacity {
            entries.drain(0..len - self.capacity);
        }
        Ok(())
    }

    /// Most recent events, newest first.
    pub async fn recent(&self, limit: usize) -> Vec<RecordedEvent> {
        let entries = self.entries.read().await;
        entries.iter().rev().take(limit).cloned().collect()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_is_bounded_and_newest_first() {
        let log = EventLog::new(3);
        for i in 0..5 {
            log.publish("test.topic", &serde_json::json!({ "n": i }))
                .await
                .unwrap();
        }
        let recent = log.recent(10).await;
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].payload["n"], 4);
        assert_eq!(recent[2].payload["n"], 2);
    }
}

use async_trait::async_trait;
use moyu_scheduler::{NotificationDelivery, NotificationPayload};

/// Shows fired reminders in the log.
pub struct LogDelivery;

#[async_trait]
impl NotificationDelivery for LogDelivery {
    async fn deliver(&self, payload: &NotificationPayload) {
        log::info!(
            "[NOTIFICATION] {}: {} (quote {})",
            payload.title,
            payload.body,
            payload.quote_id
        );
    }
}

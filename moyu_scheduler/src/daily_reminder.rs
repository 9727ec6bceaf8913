use std::sync::Arc;

use chrono::{DateTime, Utc};
use moyu_models::{language::Language, reminder::ReminderSpec};
use moyu_quotes::DailyQuoteProvider;
use tokio::sync::Mutex;

use crate::{
    center::{NotificationCenter, NotificationError},
    payload::{NotificationPayload, NotificationRequest, build_payload},
    trigger::next_trigger,
};

/// The only identifier the daily reminder is ever registered under.
pub const DAILY_REMINDER_ID: &str = "daily.reminder.notification";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReminder {
    pub identifier: String,
    pub payload: NotificationPayload,
}

/// Keeps at most one daily reminder pending in the notification center.
///
/// `schedule` replaces the pending reminder and `cancel` removes it. Both are
/// serialized, so overlapping calls settle on the state of the last one.
pub struct DailyReminderScheduler {
    center: Arc<dyn NotificationCenter>,
    quotes: Arc<DailyQuoteProvider>,
    lock: Mutex<()>,
}

impl DailyReminderScheduler {
    pub fn new(center: Arc<dyn NotificationCenter>, quotes: Arc<DailyQuoteProvider>) -> Self {
        Self {
            center,
            quotes,
            lock: Mutex::new(()),
        }
    }

    pub fn center(&self) -> &Arc<dyn NotificationCenter> {
        &self.center
    }

    /// Request for the next firing after `reference`, without registering it.
    pub fn prepare(
        &self,
        spec: ReminderSpec,
        language: Language,
        reference: DateTime<Utc>,
    ) -> NotificationRequest {
        let trigger_at = next_trigger(&spec, reference);

        NotificationRequest {
            identifier: DAILY_REMINDER_ID.to_owned(),
            spec,
            payload: build_payload(trigger_at, language, &self.quotes),
        }
    }

    pub async fn schedule(
        &self,
        spec: ReminderSpec,
        language: Language,
    ) -> Result<ScheduledReminder, NotificationError> {
        self.schedule_at(spec, language, Utc::now()).await
    }

    /// On failure nothing stays pending.
    pub async fn schedule_at(
        &self,
        spec: ReminderSpec,
        language: Language,
        reference: DateTime<Utc>,
    ) -> Result<ScheduledReminder, NotificationError> {
        let request = self.prepare(spec, language, reference);
        let scheduled = ScheduledReminder {
            identifier: request.identifier.clone(),
            payload: request.payload.clone(),
        };

        let _guard = self.lock.lock().await;
        self.center.remove_pending(DAILY_REMINDER_ID).await;

        if let Err(error) = self.center.add(request).await {
            log::error!("Failed to schedule daily reminder: {error}");
            self.center.remove_pending(DAILY_REMINDER_ID).await;
            return Err(error);
        }

        log::info!(
            "Scheduled daily reminder at {:02}:{:02} {}, next firing {} with quote {}",
            spec.fire_at.hour(),
            spec.fire_at.minute(),
            spec.timezone,
            scheduled.payload.trigger_at,
            scheduled.payload.quote_id
        );

        Ok(scheduled)
    }

    pub async fn cancel(&self) {
        let _guard = self.lock.lock().await;
        self.center.remove_pending(DAILY_REMINDER_ID).await;
        log::info!("Cancelled daily reminder");
    }

    pub async fn pending(&self) -> Option<NotificationRequest> {
        self.center.pending(DAILY_REMINDER_ID).await
    }
}

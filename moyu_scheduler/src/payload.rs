use chrono::{DateTime, Utc};
use moyu_models::{language::Language, quote::QuoteId, reminder::ReminderSpec};
use moyu_quotes::DailyQuoteProvider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    pub quote_id: QuoteId,
    pub trigger_at: DateTime<Utc>,
}

/// What gets handed to the notification center: the content plus the
/// calendar rule it repeats on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub identifier: String,
    pub spec: ReminderSpec,
    pub payload: NotificationPayload,
}

/// Content for a notification firing at `trigger_at`. The body is the quote
/// of the day the notification fires on, not of the day it was scheduled.
pub fn build_payload(
    trigger_at: DateTime<Utc>,
    language: Language,
    quotes: &DailyQuoteProvider,
) -> NotificationPayload {
    let quote = quotes.quote_for(trigger_at);
    let body = match quote.resolve_text(language) {
        Some(text) => text.to_owned(),
        None => {
            log::warn!("Quote {} has no text at all, sending an empty body", quote.id);
            String::new()
        }
    };

    NotificationPayload {
        title: language.notification_title().to_owned(),
        body,
        quote_id: quote.id,
        trigger_at,
    }
}

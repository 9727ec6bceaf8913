mod center;
mod daily_reminder;
mod local_center;
mod payload;
mod trigger;

pub use center::{AuthorizationStatus, NotificationCenter, NotificationError};
pub use daily_reminder::{DAILY_REMINDER_ID, DailyReminderScheduler, ScheduledReminder};
pub use local_center::{LocalNotificationCenter, NotificationDelivery};
pub use payload::{NotificationPayload, NotificationRequest, build_payload};
pub use trigger::next_trigger;

#[cfg(any(test, feature = "test-util"))]
pub use center::in_memory::InMemoryNotificationCenter;

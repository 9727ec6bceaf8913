use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use moyu_lifespan::{BirthDateBounds, CountdownCalculator, CountdownResult};
use moyu_models::{
    language::Language,
    quote::Quote,
    reminder::ReminderSpec,
    settings::{SettingsTransition, UserSettings},
};
use moyu_quotes::DailyQuoteProvider;
use moyu_scheduler::{
    AuthorizationStatus, DailyReminderScheduler, NotificationCenter, NotificationError,
    NotificationRequest, ScheduledReminder,
};
use moyu_storage::{SettingsStore, load_user_settings, save_user_settings};

/// Collaborators the app is assembled from.
pub struct AppParts {
    pub store: Arc<dyn SettingsStore>,
    pub center: Arc<dyn NotificationCenter>,
    pub quotes: Arc<DailyQuoteProvider>,
    pub countdown: CountdownCalculator,
    pub timezone: Tz,
    pub birth_date_min: NaiveDate,
}

/// Where the daily reminder stands after the schedule was refreshed.
#[derive(Debug)]
pub enum ReminderRefresh {
    Disabled,
    NotAuthorized(AuthorizationStatus),
    Scheduled(ScheduledReminder),
    Failed(NotificationError),
}

impl ReminderRefresh {
    pub fn scheduled(&self) -> Option<&ScheduledReminder> {
        match self {
            ReminderRefresh::Scheduled(scheduled) => Some(scheduled),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct SettingsUpdate {
    pub transition: SettingsTransition,
    /// `None` when the change left the reminder alone.
    pub reminder: Option<ReminderRefresh>,
}

/// Holds the user's settings and turns every change into explicit
/// persistence and rescheduling.
pub struct App {
    settings: UserSettings,
    store: Arc<dyn SettingsStore>,
    center: Arc<dyn NotificationCenter>,
    scheduler: DailyReminderScheduler,
    quotes: Arc<DailyQuoteProvider>,
    countdown: CountdownCalculator,
    timezone: Tz,
    birth_date_min: NaiveDate,
}

impl App {
    pub async fn load(parts: AppParts, default_language: Language) -> anyhow::Result<Self> {
        let settings = load_user_settings(parts.store.as_ref(), default_language).await?;
        log::info!(
            "Loaded settings: language = {}, sex = {}, birth date = {}, reminder = {} at {:?}",
            settings.language,
            settings.sex,
            settings.birth_date,
            settings.reminder_enabled,
            settings.reminder_time
        );

        let scheduler = DailyReminderScheduler::new(parts.center.clone(), parts.quotes.clone());

        Ok(Self {
            settings,
            store: parts.store,
            center: parts.center,
            scheduler,
            quotes: parts.quotes,
            countdown: parts.countdown,
            timezone: parts.timezone,
            birth_date_min: parts.birth_date_min,
        })
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn quote_at(&self, reference: DateTime<Utc>) -> Quote {
        self.quotes.quote_for(reference)
    }

    pub fn daily_quote(&self) -> Quote {
        self.quote_at(Utc::now())
    }

    pub fn daily_quote_text(&self) -> String {
        self.daily_quote().text(self.settings.language).to_owned()
    }

    pub fn countdown_at(&self, reference: DateTime<Utc>) -> CountdownResult {
        self.countdown
            .result(self.settings.birth_date, self.settings.sex, reference)
    }

    pub fn countdown(&self) -> CountdownResult {
        self.countdown_at(Utc::now())
    }

    pub fn birth_date_bounds(&self) -> BirthDateBounds {
        let today = Utc::now().with_timezone(&self.timezone).date_naive();
        BirthDateBounds::new(self.birth_date_min, today)
    }

    /// Applies `next`, persisting and rescheduling as the change requires.
    /// When persisting fails the current settings and reminder are kept.
    pub async fn update_settings(
        &mut self,
        mut next: UserSettings,
    ) -> anyhow::Result<SettingsUpdate> {
        next.birth_date = self.birth_date_bounds().clamp(next.birth_date);

        let transition = self.settings.transition_to(&next);
        if transition.should_persist {
            if let Err(error) = save_user_settings(self.store.as_ref(), &next).await {
                log::error!("Failed to persist settings, keeping the previous ones: {error}");
                return Err(error);
            }
        }
        self.settings = next;

        let reminder = if transition.should_reschedule {
            Some(self.refresh_notification_schedule().await)
        } else {
            None
        };

        Ok(SettingsUpdate {
            transition,
            reminder,
        })
    }

    pub async fn toggle_language(&mut self) -> anyhow::Result<Language> {
        let next = UserSettings {
            language: self.settings.language.next(),
            ..self.settings.clone()
        };
        let update = self.update_settings(next).await?;
        if update.transition.should_persist {
            log::info!("Language switched to {}", self.settings.language);
        }

        Ok(self.settings.language)
    }

    pub async fn schedule_reminder(
        &self,
        hour: u32,
        minute: u32,
        language: Language,
    ) -> anyhow::Result<ScheduledReminder> {
        let spec = ReminderSpec::daily_at(hour, minute, self.timezone)?;
        Ok(self.scheduler.schedule(spec, language).await?)
    }

    pub async fn cancel_reminder(&self) {
        self.scheduler.cancel().await;
    }

    /// Makes the pending reminder match the settings. Anything that keeps the
    /// reminder from being delivered leaves nothing pending.
    pub async fn refresh_notification_schedule(&self) -> ReminderRefresh {
        if !self.settings.reminder_enabled {
            self.scheduler.cancel().await;
            return ReminderRefresh::Disabled;
        }

        let status = self.center.authorization_status().await;
        if !status.allows_delivery() {
            log::info!("Notifications are not authorized, clearing the daily reminder");
            self.scheduler.cancel().await;
            return ReminderRefresh::NotAuthorized(status);
        }

        let spec = ReminderSpec::daily(self.settings.reminder_time, self.timezone);
        match self.scheduler.schedule(spec, self.settings.language).await {
            Ok(scheduled) => ReminderRefresh::Scheduled(scheduled),
            Err(error) => {
                log::warn!("Daily reminder was not scheduled: {error}");
                ReminderRefresh::Failed(error)
            }
        }
    }

    pub async fn configure_notifications_on_launch(&mut self) -> anyhow::Result<()> {
        let status = self.center.authorization_status().await;

        if status.allows_delivery() {
            self.refresh_notification_schedule().await;
            return Ok(());
        }

        self.scheduler.cancel().await;
        if self.settings.reminder_enabled {
            log::info!("Notifications are not authorized ({status:?}), disabling the reminder");
            let next = UserSettings {
                reminder_enabled: false,
                ..self.settings.clone()
            };
            self.update_settings(next).await?;
        }

        Ok(())
    }

    /// Asks for permission and records the answer as the reminder switch.
    pub async fn request_notification_authorization(&mut self) -> anyhow::Result<bool> {
        let granted = self.center.request_authorization().await;
        log::info!("Notification authorization granted = {granted}");

        let next = UserSettings {
            reminder_enabled: granted,
            ..self.settings.clone()
        };
        let update = self.update_settings(next).await?;
        let refresh = match update.reminder {
            Some(refresh) => refresh,
            None => self.refresh_notification_schedule().await,
        };
        if let Some(scheduled) = refresh.scheduled() {
            log::info!(
                "Daily reminder armed for {}",
                scheduled.payload.trigger_at
            );
        }

        Ok(granted)
    }

    pub async fn complete_onboarding(&mut self) -> anyhow::Result<()> {
        let next = UserSettings {
            onboarding_complete: true,
            ..self.settings.clone()
        };
        self.update_settings(next).await?;

        Ok(())
    }

    pub async fn pending_reminder(&self) -> Option<NotificationRequest> {
        self.scheduler.pending().await
    }
}

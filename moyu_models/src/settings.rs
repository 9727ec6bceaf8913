use chrono::NaiveDate;

use crate::{language::Language, reminder::ReminderFireTime, sex::BiologicalSex};

/// Everything the user can change, as decoded values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSettings {
    pub language: Language,
    pub sex: BiologicalSex,
    pub birth_date: NaiveDate,
    pub reminder_enabled: bool,
    pub reminder_time: ReminderFireTime,
    pub onboarding_complete: bool,
}

/// Side effects a settings change asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsTransition {
    pub should_persist: bool,
    pub should_reschedule: bool,
}

impl UserSettings {
    pub fn default_birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default()
    }

    pub fn with_language(language: Language) -> Self {
        Self {
            language,
            sex: BiologicalSex::Male,
            birth_date: Self::default_birth_date(),
            reminder_enabled: true,
            reminder_time: ReminderFireTime::default(),
            onboarding_complete: false,
        }
    }

    pub fn transition_to(&self, next: &UserSettings) -> SettingsTransition {
        let should_reschedule = self.language != next.language
            || self.reminder_enabled != next.reminder_enabled
            || self.reminder_time != next.reminder_time;

        SettingsTransition {
            should_persist: self != next,
            should_reschedule,
        }
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self::with_language(Language::FALLBACK)
    }
}

use chrono::{NaiveDate, NaiveTime};
use moyu_models::{
    language::Language, reminder::ReminderFireTime, settings::UserSettings, sex::BiologicalSex,
};
use thiserror::Error;

use crate::settings_store::SettingsStore;

pub mod keys {
    pub const LANGUAGE: &str = "settings.language";
    pub const SEX: &str = "settings.sex";
    pub const BIRTH_DATE: &str = "settings.birthDate";
    pub const NOTIFICATION_ENABLED: &str = "settings.notificationEnabled";
    pub const NOTIFICATION_TIME: &str = "settings.notificationTime";
    pub const ONBOARDING_COMPLETE: &str = "settings.onboardingComplete";
}

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid value {value:?} stored under {key}")]
pub struct SettingsDecodeError {
    pub key: &'static str,
    pub value: String,
}

fn decode<T>(
    key: &'static str,
    raw: Option<String>,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<Option<T>, SettingsDecodeError> {
    match raw {
        None => Ok(None),
        Some(value) => parse(&value)
            .map(Some)
            .ok_or(SettingsDecodeError { key, value }),
    }
}

async fn read<T>(
    store: &dyn SettingsStore,
    key: &'static str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> anyhow::Result<Option<T>> {
    let raw = store.get(key).await?;

    Ok(decode(key, raw, parse).unwrap_or_else(|error| {
        log::warn!("{error}, using the default");
        None
    }))
}

/// Reads every setting once. Absent or undecodable values fall back to
/// their defaults one by one; only store failures are errors.
pub async fn load_user_settings(
    store: &dyn SettingsStore,
    default_language: Language,
) -> anyhow::Result<UserSettings> {
    let defaults = UserSettings::with_language(default_language);

    let language = read(store, keys::LANGUAGE, |s| s.parse::<Language>().ok()).await?;
    let sex = read(store, keys::SEX, |s| s.parse::<BiologicalSex>().ok()).await?;
    let birth_date = read(store, keys::BIRTH_DATE, |s| {
        NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
    })
    .await?;
    let reminder_enabled = read(store, keys::NOTIFICATION_ENABLED, |s| s.parse::<bool>().ok()).await?;
    let reminder_time = read(store, keys::NOTIFICATION_TIME, |s| {
        NaiveTime::parse_from_str(s, TIME_FORMAT)
            .ok()
            .map(ReminderFireTime::new)
    })
    .await?;
    let onboarding_complete =
        read(store, keys::ONBOARDING_COMPLETE, |s| s.parse::<bool>().ok()).await?;

    Ok(UserSettings {
        language: language.unwrap_or(defaults.language),
        sex: sex.unwrap_or(defaults.sex),
        birth_date: birth_date.unwrap_or(defaults.birth_date),
        reminder_enabled: reminder_enabled.unwrap_or(defaults.reminder_enabled),
        reminder_time: reminder_time.unwrap_or(defaults.reminder_time),
        onboarding_complete: onboarding_complete.unwrap_or(defaults.onboarding_complete),
    })
}

pub async fn save_user_settings(
    store: &dyn SettingsStore,
    settings: &UserSettings,
) -> anyhow::Result<()> {
    let entries = [
        (keys::LANGUAGE, settings.language.code().to_owned()),
        (keys::SEX, settings.sex.label().to_owned()),
        (
            keys::BIRTH_DATE,
            settings.birth_date.format(DATE_FORMAT).to_string(),
        ),
        (
            keys::NOTIFICATION_ENABLED,
            settings.reminder_enabled.to_string(),
        ),
        (
            keys::NOTIFICATION_TIME,
            settings.reminder_time.time().format(TIME_FORMAT).to_string(),
        ),
        (
            keys::ONBOARDING_COMPLETE,
            settings.onboarding_complete.to_string(),
        ),
    ];

    for (key, value) in entries {
        store.set(key, value).await?;
    }

    log::debug!("Persisted user settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings_store::InMemorySettingsStore;

    #[tokio::test]
    async fn empty_store_yields_defaults() {
        let store = InMemorySettingsStore::new();

        let settings = load_user_settings(&store, Language::Spanish).await.unwrap();

        assert_eq!(settings, UserSettings::with_language(Language::Spanish));
    }

    #[tokio::test]
    async fn saved_settings_load_back() {
        let store = InMemorySettingsStore::new();
        let settings = UserSettings {
            language: Language::SimplifiedChinese,
            sex: BiologicalSex::Female,
            birth_date: NaiveDate::from_ymd_opt(1988, 2, 29).unwrap(),
            reminder_enabled: false,
            reminder_time: ReminderFireTime::from_hm(21, 45).unwrap(),
            onboarding_complete: true,
        };

        save_user_settings(&store, &settings).await.unwrap();
        let loaded = load_user_settings(&store, Language::English).await.unwrap();

        assert_eq!(loaded, settings);
        assert_eq!(
            store.get(keys::NOTIFICATION_TIME).await.unwrap().as_deref(),
            Some("21:45")
        );
    }

    #[tokio::test]
    async fn garbage_values_fall_back_individually() {
        let store = InMemorySettingsStore::with_values([
            (keys::LANGUAGE, "klingon"),
            (keys::SEX, "female"),
            (keys::BIRTH_DATE, "yesterday"),
            (keys::NOTIFICATION_ENABLED, "nope"),
            (keys::NOTIFICATION_TIME, "07:05"),
        ]);

        let settings = load_user_settings(&store, Language::Japanese).await.unwrap();

        assert_eq!(settings.language, Language::Japanese);
        assert_eq!(settings.sex, BiologicalSex::Female);
        assert_eq!(settings.birth_date, UserSettings::default_birth_date());
        assert!(settings.reminder_enabled);
        assert_eq!(
            settings.reminder_time,
            ReminderFireTime::from_hm(7, 5).unwrap()
        );
    }

    #[test]
    fn decode_reports_the_offending_value() {
        let result = decode(keys::SEX, Some("other".to_owned()), |s| {
            s.parse::<BiologicalSex>().ok()
        });

        assert_eq!(
            result,
            Err(SettingsDecodeError {
                key: keys::SEX,
                value: "other".to_owned()
            })
        );
    }
}

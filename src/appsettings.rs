use chrono::NaiveDate;
use chrono_tz::Tz;
use config::{Config, ConfigError, Environment, File};
use moyu_lifespan::{DEFAULT_EXPECTANCY_YEARS, LifeExpectancyTable, default_min_birth_date};
use moyu_models::sex::BiologicalSex;
use moyu_quotes::default_anchor_date;
use moyu_storage::keys;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct QuoteSettings {
    #[serde(default = "default_anchor_date")]
    pub anchor_date: NaiveDate,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            anchor_date: default_anchor_date(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct LifespanSettings {
    #[serde(default = "default_male_expectancy")]
    pub male: f64,
    #[serde(default = "default_female_expectancy")]
    pub female: f64,
    #[serde(default = "default_fallback_expectancy")]
    pub fallback: f64,
}

fn default_male_expectancy() -> f64 {
    73.5
}

fn default_female_expectancy() -> f64 {
    79.3
}

fn default_fallback_expectancy() -> f64 {
    DEFAULT_EXPECTANCY_YEARS
}

impl Default for LifespanSettings {
    fn default() -> Self {
        Self {
            male: default_male_expectancy(),
            female: default_female_expectancy(),
            fallback: default_fallback_expectancy(),
        }
    }
}

impl LifespanSettings {
    pub fn table(&self) -> LifeExpectancyTable {
        LifeExpectancyTable::new(
            [
                (BiologicalSex::Male, self.male),
                (BiologicalSex::Female, self.female),
            ],
            self.fallback,
        )
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct NotificationSettings {
    #[serde(default)]
    pub authorized: bool,
}

/// Initial values for the settings store, in its storage encoding.
#[derive(Deserialize, Debug, Default)]
pub struct ProfileSettings {
    pub language: Option<String>,
    pub sex: Option<String>,
    pub birth_date: Option<String>,
    pub reminder_enabled: Option<bool>,
    pub reminder_time: Option<String>,
    pub onboarding_complete: Option<bool>,
}

impl ProfileSettings {
    pub fn store_entries(&self) -> Vec<(&'static str, String)> {
        [
            (keys::LANGUAGE, self.language.clone()),
            (keys::SEX, self.sex.clone()),
            (keys::BIRTH_DATE, self.birth_date.clone()),
            (
                keys::NOTIFICATION_ENABLED,
                self.reminder_enabled.map(|v| v.to_string()),
            ),
            (keys::NOTIFICATION_TIME, self.reminder_time.clone()),
            (
                keys::ONBOARDING_COMPLETE,
                self.onboarding_complete.map(|v| v.to_string()),
            ),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
    }
}

#[derive(Deserialize, Debug)]
pub struct AppSettings {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub preferred_languages: Vec<String>,
    #[serde(default = "default_min_birth_date")]
    pub birth_date_min: NaiveDate,
    #[serde(default)]
    pub quotes: QuoteSettings,
    #[serde(default)]
    pub lifespan: LifespanSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub profile: ProfileSettings,
}

fn default_timezone() -> String {
    "UTC".to_owned()
}

impl AppSettings {
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("appsettings").required(false))
            .add_source(File::with_name("appsettings.local").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn timezone(&self) -> anyhow::Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|error| anyhow::anyhow!("Invalid timezone {}: {error}", self.timezone))
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(source: &str) -> AppSettings {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_file_gives_defaults() {
        let settings = from_toml("");

        assert_eq!(settings.timezone().unwrap(), Tz::UTC);
        assert_eq!(settings.birth_date_min, default_min_birth_date());
        assert_eq!(settings.quotes.anchor_date, default_anchor_date());
        assert_eq!(
            settings.lifespan.table(),
            LifeExpectancyTable::default()
        );
        assert!(!settings.notifications.authorized);
        assert!(settings.profile.store_entries().is_empty());
    }

    #[test]
    fn values_are_read_from_sections() {
        let settings = from_toml(
            r#"
            timezone = "Europe/Madrid"
            preferred_languages = ["es-ES", "en-GB"]

            [quotes]
            anchor_date = "2025-01-01"

            [lifespan]
            female = 84.0

            [notifications]
            authorized = true

            [profile]
            sex = "female"
            reminder_time = "07:30"
            "#,
        );

        assert_eq!(settings.timezone().unwrap(), chrono_tz::Europe::Madrid);
        assert_eq!(settings.preferred_languages, ["es-ES", "en-GB"]);
        assert_eq!(
            settings.quotes.anchor_date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(
            settings.lifespan.table().expectancy_years(BiologicalSex::Female),
            84.0
        );
        assert_eq!(
            settings.lifespan.table().expectancy_years(BiologicalSex::Male),
            73.5
        );
        assert!(settings.notifications.authorized);
        assert_eq!(
            settings.profile.store_entries(),
            [
                (keys::SEX, "female".to_owned()),
                (keys::NOTIFICATION_TIME, "07:30".to_owned())
            ]
        );
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let settings = from_toml(r#"timezone = "Mars/Olympus_Mons""#);

        assert!(settings.timezone().is_err());
    }
}

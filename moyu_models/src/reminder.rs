use chrono::{NaiveTime, Timelike};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid reminder time {hour:02}:{minute:02}")]
pub struct InvalidFireTime {
    pub hour: u32,
    pub minute: u32,
}

/// Local wall-clock time of day a reminder fires at, truncated to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReminderFireTime(NaiveTime);

impl ReminderFireTime {
    pub fn new(inner: NaiveTime) -> Self {
        Self(NaiveTime::from_hms_opt(inner.hour(), inner.minute(), 0).unwrap_or(inner))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, InvalidFireTime> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or(InvalidFireTime { hour, minute })
    }

    pub fn time(&self) -> &NaiveTime {
        &self.0
    }

    pub fn into_time(self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl Default for ReminderFireTime {
    fn default() -> Self {
        Self(NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSpec {
    pub fire_at: ReminderFireTime,
    pub timezone: Tz,
    pub repeats: bool,
}

impl ReminderSpec {
    pub fn daily(fire_at: ReminderFireTime, timezone: Tz) -> Self {
        Self {
            fire_at,
            timezone,
            repeats: true,
        }
    }

    pub fn daily_at(hour: u32, minute: u32, timezone: Tz) -> Result<Self, InvalidFireTime> {
        Ok(Self::daily(ReminderFireTime::from_hm(hour, minute)?, timezone))
    }
}

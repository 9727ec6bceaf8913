use chrono::NaiveDate;

pub fn default_min_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1940, 1, 1).unwrap_or_default()
}

/// Range of birth dates the app accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl BirthDateBounds {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        Self {
            min: min.min(max),
            max,
        }
    }

    pub fn up_to(today: NaiveDate) -> Self {
        Self::new(default_min_birth_date(), today)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.min..=self.max).contains(&date)
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }
}

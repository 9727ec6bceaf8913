use std::collections::HashMap;

use chrono::{Days, Months, NaiveDate};
use moyu_models::sex::BiologicalSex;

/// Used for a sex missing from the table.
pub const DEFAULT_EXPECTANCY_YEARS: f64 = 76.0;
pub const MEAN_GREGORIAN_YEAR_DAYS: f64 = 365.2425;

#[derive(Debug, Clone, PartialEq)]
pub struct LifeExpectancyTable {
    values: HashMap<BiologicalSex, f64>,
    fallback: f64,
}

impl LifeExpectancyTable {
    pub fn new(values: impl IntoIterator<Item = (BiologicalSex, f64)>, fallback: f64) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback,
        }
    }

    pub fn expectancy_years(&self, sex: BiologicalSex) -> f64 {
        self.values.get(&sex).copied().unwrap_or(self.fallback)
    }

    /// Birth date plus the expectancy: whole years on the calendar first,
    /// then the fraction as mean Gregorian days rounded half away from zero.
    ///
    /// A step that leaves the representable calendar keeps the date it
    /// started from.
    pub fn projected_end_date(&self, birth_date: NaiveDate, sex: BiologicalSex) -> NaiveDate {
        let expectancy = self.expectancy_years(sex);
        let whole_years = expectancy.trunc();
        let fraction = expectancy - whole_years;

        let after_years = add_years(birth_date, whole_years as i64).unwrap_or_else(|| {
            log::warn!(
                "Could not add {whole_years} years to {birth_date}, keeping the birth date"
            );
            birth_date
        });

        let extra_days = (fraction * MEAN_GREGORIAN_YEAR_DAYS).round() as i64;
        add_days(after_years, extra_days).unwrap_or_else(|| {
            log::warn!("Could not add {extra_days} days to {after_years}, keeping it as is");
            after_years
        })
    }
}

impl Default for LifeExpectancyTable {
    /// CDC 2022 figures.
    fn default() -> Self {
        Self::new(
            [(BiologicalSex::Male, 73.5), (BiologicalSex::Female, 79.3)],
            DEFAULT_EXPECTANCY_YEARS,
        )
    }
}

fn add_years(date: NaiveDate, years: i64) -> Option<NaiveDate> {
    let months = u32::try_from(years.checked_mul(12)?.unsigned_abs()).ok()?;

    if years >= 0 {
        date.checked_add_months(Months::new(months))
    } else {
        date.checked_sub_months(Months::new(months))
    }
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

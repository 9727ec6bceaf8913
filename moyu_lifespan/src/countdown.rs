use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use moyu_models::sex::BiologicalSex;

use crate::expectancy::LifeExpectancyTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownResult {
    /// Calendar days from the reference day to the projected end date.
    /// Zero or negative once the projection has been reached.
    pub days_left: i64,
    pub end_date: NaiveDate,
}

impl CountdownResult {
    pub fn is_bonus(&self) -> bool {
        self.days_left <= 0
    }

    pub fn absolute_days(&self) -> u64 {
        self.days_left.unsigned_abs()
    }
}

#[derive(Debug, Clone)]
pub struct CountdownCalculator {
    table: LifeExpectancyTable,
    timezone: Tz,
}

impl CountdownCalculator {
    pub fn new(table: LifeExpectancyTable, timezone: Tz) -> Self {
        Self { table, timezone }
    }

    pub fn table(&self) -> &LifeExpectancyTable {
        &self.table
    }

    pub fn result(
        &self,
        birth_date: NaiveDate,
        sex: BiologicalSex,
        reference: DateTime<Utc>,
    ) -> CountdownResult {
        let end_date = self.table.projected_end_date(birth_date, sex);
        let today = reference.with_timezone(&self.timezone).date_naive();

        CountdownResult {
            days_left: (end_date - today).num_days(),
            end_date,
        }
    }

    pub fn result_now(&self, birth_date: NaiveDate, sex: BiologicalSex) -> CountdownResult {
        self.result(birth_date, sex, Utc::now())
    }
}

mod bounds;
mod countdown;
mod expectancy;

pub use bounds::{BirthDateBounds, default_min_birth_date};
pub use countdown::{CountdownCalculator, CountdownResult};
pub use expectancy::{DEFAULT_EXPECTANCY_YEARS, LifeExpectancyTable, MEAN_GREGORIAN_YEAR_DAYS};

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use moyu_models::quote::Quote;

use crate::corpus::QuoteCorpus;

/// Day that maps to the first quote of the corpus.
pub fn default_anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

#[derive(Debug, Clone)]
struct CachedQuote {
    day: NaiveDate,
    quote: Quote,
}

/// Picks one quote per calendar day by walking the corpus in order, starting
/// at the anchor day and wrapping around.
///
/// The last answer is memoized; a repeated request for the same local day
/// returns it without touching the corpus again.
#[derive(Debug)]
pub struct DailyQuoteProvider {
    corpus: QuoteCorpus,
    timezone: Tz,
    anchor: NaiveDate,
    cache: Mutex<Option<CachedQuote>>,
}

impl DailyQuoteProvider {
    pub fn new(corpus: QuoteCorpus, timezone: Tz) -> Self {
        Self {
            corpus,
            timezone,
            anchor: default_anchor_date(),
            cache: Mutex::new(None),
        }
    }

    pub fn with_anchor(mut self, anchor: NaiveDate) -> Self {
        self.anchor = anchor;
        self.cache = Mutex::new(None);
        self
    }

    pub fn corpus(&self) -> &QuoteCorpus {
        &self.corpus
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Calendar day `instant` falls on in the provider's timezone.
    pub fn local_day(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.timezone).date_naive()
    }

    pub fn quote_for(&self, instant: DateTime<Utc>) -> Quote {
        self.quote_for_day(self.local_day(instant))
    }

    pub fn quote_for_day(&self, day: NaiveDate) -> Quote {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = cache.as_ref().filter(|cached| cached.day == day) {
            return cached.quote.clone();
        }

        let quote = self.rotated_quote(day).clone();
        *cache = Some(CachedQuote {
            day,
            quote: quote.clone(),
        });

        quote
    }

    /// Position in the corpus for `day`; non-negative for days before the
    /// anchor as well.
    pub fn rotation_index(&self, day: NaiveDate) -> usize {
        let days_since_anchor = (day - self.anchor).num_days();
        let len = self.corpus.len() as i64;

        days_since_anchor.rem_euclid(len) as usize
    }

    fn rotated_quote(&self, day: NaiveDate) -> &Quote {
        let index = self.rotation_index(day);
        &self.corpus.all()[index]
    }
}

#[cfg(test)]
mod tests;

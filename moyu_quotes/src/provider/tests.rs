use chrono::{Days, TimeZone};
use moyu_models::language::Language;
use proptest::prelude::*;

use super::*;

fn numbered_corpus(len: u32) -> QuoteCorpus {
    let quotes = (0..len)
        .map(|id| Quote::new(id, [(Language::English, format!("quote {id}"))]))
        .collect();

    QuoteCorpus::new(quotes).unwrap()
}

fn anchor_plus(days: i64) -> NaiveDate {
    let anchor = default_anchor_date();
    if days >= 0 {
        anchor.checked_add_days(Days::new(days as u64)).unwrap()
    } else {
        anchor.checked_sub_days(Days::new(days.unsigned_abs())).unwrap()
    }
}

#[test]
fn anchor_day_is_first_quote() {
    let provider = DailyQuoteProvider::new(QuoteCorpus::builtin(), Tz::UTC);

    let quote = provider.quote_for_day(default_anchor_date());

    assert_eq!(quote.id, 1);
}

#[test]
fn day_before_anchor_wraps_to_last_quote() {
    let provider = DailyQuoteProvider::new(QuoteCorpus::builtin(), Tz::UTC);

    let quote = provider.quote_for_day(anchor_plus(-1));

    assert_eq!(quote.id, 35);
}

#[test]
fn local_midnight_decides_the_day() {
    let provider = DailyQuoteProvider::new(numbered_corpus(7), chrono_tz::Asia::Tokyo);
    // 14:59 UTC is 23:59 in Tokyo, 15:00 UTC is already the next day there.
    let before_midnight = Utc.with_ymd_and_hms(2025, 3, 10, 14, 59, 0).unwrap();
    let after_midnight = Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap();

    let first = provider.quote_for(before_midnight);
    let second = provider.quote_for(after_midnight);

    assert_eq!((first.id + 1) % 7, second.id);
}

#[test]
fn anchor_can_be_moved() {
    let anchor = NaiveDate::from_ymd_opt(2030, 5, 5).unwrap();
    let provider = DailyQuoteProvider::new(numbered_corpus(3), Tz::UTC).with_anchor(anchor);

    assert_eq!(provider.quote_for_day(anchor).id, 0);
    assert_eq!(provider.anchor(), anchor);
}

#[test]
fn cached_answer_matches_a_fresh_provider() {
    let cached = DailyQuoteProvider::new(QuoteCorpus::builtin(), Tz::UTC);
    let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let other_day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    let first = cached.quote_for_day(day);
    let _ = cached.quote_for_day(other_day);
    let again = cached.quote_for_day(day);
    let repeated = cached.quote_for_day(day);

    let fresh = DailyQuoteProvider::new(QuoteCorpus::builtin(), Tz::UTC).quote_for_day(day);
    assert_eq!(first, fresh);
    assert_eq!(again, fresh);
    assert_eq!(repeated, fresh);
}

fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    // Roughly 1900..2150.
    (-2_208_988_800i64..5_680_281_600i64)
        .prop_map(|secs| DateTime::from_timestamp(secs, 0).unwrap())
}

proptest! {
    #[test]
    fn same_local_day_gives_same_quote(
        instant in instant_strategy(),
        second_of_day in 0u32..86_400,
    ) {
        let provider = DailyQuoteProvider::new(QuoteCorpus::builtin(), chrono_tz::America::New_York);
        let local = instant.with_timezone(&provider.timezone());
        let day = local.date_naive();
        let time = chrono::NaiveTime::from_num_seconds_from_midnight_opt(second_of_day, 0).unwrap();
        let other = provider.timezone().from_local_datetime(&day.and_time(time)).earliest();
        prop_assume!(other.is_some());
        let other = other.unwrap();

        prop_assert_eq!(
            provider.quote_for(instant),
            provider.quote_for(other.with_timezone(&Utc))
        );
    }

    #[test]
    fn rotation_has_corpus_length_period(
        len in 1u32..40,
        k in -40_000i64..40_000,
        cycles in -100i64..100,
    ) {
        let provider = DailyQuoteProvider::new(numbered_corpus(len), Tz::UTC);
        let day = anchor_plus(k);
        let shifted = anchor_plus(k + cycles * len as i64);

        prop_assert_eq!(provider.quote_for_day(day), provider.quote_for_day(shifted));
        prop_assert_eq!(
            provider.quote_for_day(anchor_plus(cycles * len as i64)).id,
            0
        );
    }

    #[test]
    fn quote_always_comes_from_the_corpus(instant in instant_strategy()) {
        let corpus = QuoteCorpus::builtin();
        let provider = DailyQuoteProvider::new(corpus.clone(), Tz::UTC);

        let quote = provider.quote_for(instant);

        prop_assert!(corpus.lookup(quote.id).is_some());
        prop_assert!(provider.rotation_index(provider.local_day(instant)) < corpus.len());
    }
}

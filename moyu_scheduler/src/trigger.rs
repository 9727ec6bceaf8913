use chrono::{DateTime, Days, LocalResult, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use moyu_models::reminder::ReminderSpec;

/// Days past the reference day that are searched for a matching slot. One
/// would do for every real timezone; the rest is slack for skipped days.
const LOOKAHEAD_DAYS: u64 = 3;

/// Longest run of local minutes a timezone transition can skip.
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Soonest instant strictly after `reference` whose wall-clock time in the
/// spec's timezone is the spec's fire time.
///
/// A fire time skipped by a forward transition resolves to the first local
/// time that exists after it. A fire time repeated by a backward transition
/// only counts once, at its earlier occurrence.
///
/// Falls back to `reference` when nothing can be resolved.
pub fn next_trigger(spec: &ReminderSpec, reference: DateTime<Utc>) -> DateTime<Utc> {
    let today = reference.with_timezone(&spec.timezone).date_naive();

    (0..=LOOKAHEAD_DAYS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .filter_map(|day| resolve_wall_clock(&spec.timezone, day.and_time(*spec.fire_at.time())))
        .find(|candidate| *candidate > reference)
        .unwrap_or_else(|| {
            log::warn!(
                "Could not resolve the next {:?} in {} after {reference}, using the reference instant",
                spec.fire_at,
                spec.timezone
            );
            reference
        })
}

fn resolve_wall_clock(timezone: &Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    match timezone.from_local_datetime(&local) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
            Some(instant.with_timezone(&Utc))
        }
        LocalResult::None => (1..=MAX_GAP_MINUTES)
            .filter_map(|minutes| local.checked_add_signed(TimeDelta::minutes(minutes)))
            .find_map(|shifted| timezone.from_local_datetime(&shifted).earliest())
            .map(|instant| instant.with_timezone(&Utc)),
    }
}

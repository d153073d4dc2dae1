//! Time-interval utilities.
//!
//! Pure helpers shared by the day index and the layout engine. Calendar days
//! are always resolved in an explicit reference zone; nothing here reads the
//! process-local timezone or locale.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{LayoutError, Result};

/// Inclusive overlap test.
///
/// Two intervals overlap unless one ends strictly before the other starts,
/// so intervals that only touch at an endpoint count as overlapping.
pub fn overlaps<T: PartialOrd>(a: (T, T), b: (T, T)) -> bool {
    !(a.1 < b.0 || b.1 < a.0)
}

/// Calendar date of `instant` in the reference zone.
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Resolve a wall-clock time in `tz` to an instant.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant. Times
/// skipped by a DST jump are shifted by the offset in force just before the
/// gap, which lands them just after it.
pub fn resolve_local(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            let offset = tz.offset_from_utc_datetime(&naive).fix();
            let utc = naive - Duration::seconds(i64::from(offset.local_minus_utc()));
            Utc.from_utc_datetime(&utc)
        }
    }
}

/// First instant of `date` in the reference zone.
pub fn local_midnight(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    resolve_local(date.and_time(NaiveTime::MIN), tz)
}

/// Midnight of the calendar day containing `instant`.
pub fn truncate_to_day_start(instant: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    local_midnight(local_date(instant, tz), tz)
}

/// Canonical `YYYY-MM-DD` key for a calendar date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Canonical day key of `instant` in the reference zone.
pub fn day_key(instant: DateTime<Utc>, tz: Tz) -> String {
    date_key(local_date(instant, tz))
}

/// Position of `instant` within `[window_start, window_end]` as a fraction,
/// clamped to `[0.0, 1.0]`.
///
/// Measured in nanoseconds, so every window with a positive duration works.
/// Spans too long for nanoseconds fall back to milliseconds.
pub fn map_to_fraction(
    instant: DateTime<Utc>,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Result<f64> {
    if window_end <= window_start {
        return Err(LayoutError::EmptyWindow {
            start: window_start,
            end: window_end,
        });
    }

    let span = window_end - window_start;
    let offset = instant - window_start;
    let fraction = match (offset.num_nanoseconds(), span.num_nanoseconds()) {
        (Some(offset), Some(span)) => offset as f64 / span as f64,
        // An overflowing offset lies far outside the window and clamps.
        _ => offset.num_milliseconds() as f64 / span.num_milliseconds() as f64,
    };
    Ok(fraction.clamp(0.0, 1.0))
}

/// Every calendar date from `start` to `end` inclusive. Empty when `end`
/// precedes `start`.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|date| *date <= end).collect()
}

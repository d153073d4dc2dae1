// Window module
// Visible time span for one layout call

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{LayoutError, Result};
use crate::utils::date::resolve_local;

/// Visible span `[start, end)` of a day view.
///
/// Constructed fresh for every layout call and never mutated. Construction
/// guarantees a positive duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    /// Zone of the calendar day the window was built for.
    time_zone: Option<Tz>,
}

impl Window {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(LayoutError::EmptyWindow { start, end });
        }
        Ok(Self {
            start,
            end,
            time_zone: None,
        })
    }

    /// Window covering one calendar day of `tz`, shifted by `day_start_hour`.
    ///
    /// The window ends at the same wall-clock time on the following day, so
    /// it spans 23 or 25 hours across DST transitions.
    pub fn for_day(date: NaiveDate, tz: Tz, day_start_hour: u32) -> Result<Self> {
        if day_start_hour > 23 {
            return Err(LayoutError::InvalidDayStartHour(day_start_hour));
        }

        let offset = Duration::hours(i64::from(day_start_hour));
        let start = resolve_local(date.and_time(NaiveTime::MIN) + offset, tz);
        let next = date.succ_opt().unwrap_or(date);
        let end = resolve_local(next.and_time(NaiveTime::MIN) + offset, tz);
        Ok(Self {
            time_zone: Some(tz),
            ..Self::new(start, end)?
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Reference zone when the window covers a calendar day.
    pub fn time_zone(&self) -> Option<Tz> {
        self.time_zone
    }

    /// Instant lying `fraction` of the way through the window, rounded to
    /// the nearest nanosecond.
    pub fn instant_at(&self, fraction: f64) -> DateTime<Utc> {
        let fraction = fraction.clamp(0.0, 1.0);
        match self.duration().num_nanoseconds() {
            Some(total) => self.start + Duration::nanoseconds((fraction * total as f64).round() as i64),
            None => {
                let total = self.duration().num_milliseconds();
                self.start + Duration::milliseconds((fraction * total as f64).round() as i64)
            }
        }
    }

    /// Closed span used to decide visibility. The closing boundary is pulled
    /// in by one nanosecond so events starting exactly at `end` are excluded.
    pub fn visibility_span(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start, self.end - Duration::nanoseconds(1))
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::models::event::Event;
use crate::models::settings::TimeFormat;
use crate::utils::date::local_date;

/// Wall-clock label of `instant` in `tz`.
pub fn format_clock(instant: DateTime<Utc>, tz: Tz, format: TimeFormat) -> String {
    instant.with_timezone(&tz).format(format.pattern()).to_string()
}

/// Time label for an event as shown on `view_date`.
///
/// All-day events read "All day". Otherwise each side of the range is shown
/// only when it falls on the viewed day, so a multi-day event reads
/// "22:00–" on its first day and "–06:00" on its last.
pub fn format_event_time(event: &Event, view_date: NaiveDate, tz: Tz, format: TimeFormat) -> String {
    if event.all_day {
        return "All day".to_string();
    }

    let side = |instant: DateTime<Utc>| {
        if local_date(instant, tz) == view_date {
            format_clock(instant, tz, format)
        } else {
            String::new()
        }
    };

    format!("{}–{}", side(event.start), side(event.end))
}

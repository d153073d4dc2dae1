// Test fixtures - reusable test data
// Provides consistent events and windows across all test files

#![allow(dead_code)]

use calendar_layout::models::event::Event;
use calendar_layout::models::window::Window;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Saturday, Nov 1, 2025
    pub fn nov_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
    }

    /// Instant on Nov 1, 2025 (UTC)
    pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 1, hour, minute, 0).unwrap()
    }

    /// Instant on an arbitrary day (UTC)
    pub fn on(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
    }

    /// The full UTC day of Nov 1, 2025
    pub fn day_window() -> Window {
        Window::for_day(nov_1_2025(), Tz::UTC, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Timed event with a color tag
    pub fn timed(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event::builder()
            .id(id)
            .title(format!("Event {id}"))
            .start(start)
            .end(end)
            .color("lavender")
            .build()
            .unwrap()
    }

    /// All-day event covering the whole of Nov 1, 2025
    pub fn holiday() -> Event {
        Event::builder()
            .id("holiday")
            .title("All Day Conference")
            .start(dates::at(0, 0))
            .end(dates::at(23, 59))
            .all_day(true)
            .color("peach")
            .build()
            .unwrap()
    }

    /// Week-long trip spanning the end of January 2026
    pub fn trip() -> Event {
        timed("trip", dates::on(2026, 1, 29, 18, 0), dates::on(2026, 2, 4, 10, 0))
    }
}

/// Ids of the laid-out events, in layout order
pub fn ids<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<&'a str> {
    events.into_iter().map(|event| event.id.as_str()).collect()
}

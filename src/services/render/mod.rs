//! Rendering adapters.
//!
//! Map the engine's slot and column assignments to presentation coordinates.
//! This is the only place presentation units (grid templates, percentages)
//! appear. Adapters are pure: they only build and return a value.

mod css;
mod labels;
mod percent;

pub use css::{CssGrid, CssGridAdapter, CssGridItem, TimeMarker};
pub use labels::{format_clock, format_event_time};
pub use percent::{PercentAdapter, PercentBox, PercentLayout};

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::models::event::Event;
use crate::models::settings::{LayoutSettings, TimeFormat};
use crate::models::window::Window;
use crate::services::layout::LayoutResult;
use crate::utils::date::local_date;

/// Converts a layout into one presentation surface's coordinates.
pub trait GridAdapter {
    type Output;

    fn render(&self, layout: &LayoutResult<'_>) -> Self::Output;
}

/// Display options shared by every adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub time_zone: Tz,
    pub time_format: TimeFormat,
    /// Hour the view should initially scroll to.
    pub day_start_hour: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&LayoutSettings::default())
    }
}

impl From<&LayoutSettings> for RenderOptions {
    fn from(settings: &LayoutSettings) -> Self {
        Self {
            time_zone: settings.time_zone,
            time_format: settings.time_format,
            day_start_hour: settings.day_start_hour,
        }
    }
}

impl RenderOptions {
    /// Calendar date the window is viewed as.
    pub fn view_date(&self, window: &Window) -> NaiveDate {
        local_date(window.start(), self.time_zone)
    }

    pub fn label_for(&self, event: &Event, view_date: NaiveDate) -> EventLabel {
        EventLabel {
            event_id: event.id.clone(),
            title: event.title.clone(),
            color: event.color.clone(),
            time: format_event_time(event, view_date, self.time_zone, self.time_format),
        }
    }

    /// Index of the first marker whose local hour is `day_start_hour`.
    pub fn scroll_marker(&self, markers: &[DateTime<Utc>]) -> Option<usize> {
        markers.iter().position(|instant| {
            instant.with_timezone(&self.time_zone).hour() == self.day_start_hour
        })
    }
}

/// Text shown for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventLabel {
    pub event_id: String,
    pub title: String,
    pub color: String,
    pub time: String,
}

/// Height of every row as a rounded percentage of the window.
pub fn row_weights(splits: &[f64]) -> Vec<u32> {
    splits
        .windows(2)
        .map(|pair| ((pair[1] - pair[0]) * 100.0).round() as u32)
        .collect()
}

/// Instant of each fixed line, from the window start to its end.
pub fn time_stamps(window: &Window, fixed_lines: &[f64]) -> Vec<DateTime<Utc>> {
    fixed_lines
        .iter()
        .map(|&fraction| window.instant_at(fraction))
        .collect()
}

// Settings module
// User preferences that shape the day and week layouts

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Clock style for time labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl TimeFormat {
    /// strftime pattern for an hour:minute label.
    pub fn pattern(&self) -> &'static str {
        match self {
            TimeFormat::TwelveHour => "%-I:%M %p",
            TimeFormat::TwentyFourHour => "%H:%M",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Number of equal fixed subdivisions of the day (hour lines).
    pub fixed_split_count: u32,
    /// Hour the day view initially scrolls to.
    pub day_start_hour: u32,
    /// 0 = Sunday, 1 = Monday, etc.
    pub week_start: u8,
    pub time_format: TimeFormat,
    /// Reference zone for calendar-day boundaries and labels.
    pub time_zone: Tz,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            fixed_split_count: 24,
            day_start_hour: 0,
            week_start: 0, // Sunday
            time_format: TimeFormat::TwentyFourHour,
            time_zone: Tz::UTC,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<()> {
        if self.fixed_split_count == 0 {
            return Err(LayoutError::InvalidSplitCount(self.fixed_split_count));
        }

        if self.day_start_hour > 23 {
            return Err(LayoutError::InvalidDayStartHour(self.day_start_hour));
        }

        if self.week_start > 6 {
            return Err(LayoutError::InvalidSettings(format!(
                "week start must be between 0 and 6, got {}",
                self.week_start
            )));
        }

        Ok(())
    }
}

// Event module
// Timed or all-day calendar entry as supplied by the persistence layer

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar event as seen by the layout core.
///
/// Events are treated as immutable values for the duration of a layout
/// computation. `start <= end` is not guaranteed: upstream data may contain
/// zero-duration or inverted intervals, which the core tolerates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub color: String,
}

impl Event {
    /// Create a timed event with no color tag
    ///
    /// # Examples
    /// ```
    /// use calendar_layout::models::event::Event;
    /// use chrono::{Duration, Utc};
    ///
    /// let start = Utc::now();
    /// let event = Event::new("evt-1", "Team Meeting", start, start + Duration::hours(1));
    /// assert!(!event.all_day);
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            all_day: false,
            color: String::new(),
        }
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// True when the event ends before it starts.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Start and end ordered so that the first is never after the second.
    pub fn normalized_span(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        if self.is_inverted() {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        }
    }

    /// Get the duration of the event (negative for inverted events)
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    all_day: bool,
    color: String,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            start: None,
            end: None,
            all_day: false,
            color: String::new(),
        }
    }

    /// Set the event identifier
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set as all-day event
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Set the display color tag, passed through untouched
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        Ok(Event {
            id,
            title,
            start,
            end,
            all_day: self.all_day,
            color: self.color,
        })
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of data problem found in an upstream event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// `end` is earlier than `start`.
    InvertedInterval,
}

/// A non-fatal problem with an input event, returned to the caller so it can
/// be corrected upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataQualityWarning {
    pub event_id: String,
    pub title: String,
    pub kind: WarningKind,
}

impl DataQualityWarning {
    pub fn inverted(event: &Event) -> Self {
        Self {
            event_id: event.id.clone(),
            title: event.title.clone(),
            kind: WarningKind::InvertedInterval,
        }
    }
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::InvertedInterval => write!(
                f,
                "event '{}' ({}) ends before it starts",
                self.title, self.event_id
            ),
        }
    }
}

//! Day-bucketing index.
//!
//! Groups events by every calendar day they touch, for month and week
//! summaries. Buckets list all-day events first, then timed events by start.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::models::event::{DataQualityWarning, Event};
use crate::utils::date::{date_key, dates_between, local_date};

/// Events keyed by canonical `YYYY-MM-DD` day key.
#[derive(Debug, Clone, Default)]
pub struct DayIndex<'a> {
    buckets: BTreeMap<String, Vec<&'a Event>>,
    warnings: Vec<DataQualityWarning>,
}

impl<'a> DayIndex<'a> {
    /// Events touching the day `key`; empty when the day has none.
    pub fn get(&self, key: &str) -> &[&'a Event] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn for_date(&self, date: NaiveDate) -> &[&'a Event] {
        self.get(&date_key(date))
    }

    /// Buckets in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a Event])> {
        self.buckets
            .iter()
            .map(|(key, events)| (key.as_str(), events.as_slice()))
    }

    /// Number of non-empty day buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Data-quality problems found while building the index.
    pub fn warnings(&self) -> &[DataQualityWarning] {
        &self.warnings
    }
}

/// Build the day index for `events`, resolving days in `tz`.
///
/// A multi-day event lands in every bucket from its start day to its end day
/// inclusive. An inverted event (`end < start`) is bucketed on its start day
/// only and reported as a warning.
pub fn build_day_index(events: &[Event], tz: Tz) -> DayIndex<'_> {
    let mut index = DayIndex::default();

    for event in events {
        let first = local_date(event.start, tz);
        let days = if event.is_inverted() {
            log::warn!(
                "Event '{}' ({}) ends before it starts; bucketing on start day only",
                event.title,
                event.id
            );
            index.warnings.push(DataQualityWarning::inverted(event));
            vec![first]
        } else {
            dates_between(first, local_date(event.end, tz))
        };

        for day in days {
            index.buckets.entry(date_key(day)).or_default().push(event);
        }
    }

    for bucket in index.buckets.values_mut() {
        bucket.sort_by(|a, b| bucket_order(a, b));
    }

    log::debug!(
        "Built day index: {} events across {} days",
        events.len(),
        index.buckets.len()
    );

    index
}

/// All-day events first (kept in input order), then timed events by start.
fn bucket_order(a: &Event, b: &Event) -> Ordering {
    match (a.all_day, b.all_day) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => Ordering::Equal,
        (false, false) => a.start.cmp(&b.start),
    }
}
